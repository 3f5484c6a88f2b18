//! Team draft (form data), normalized payload, and registered team.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a registered team.
pub type TeamId = Uuid;

/// Longest accepted value of any team field, in characters.
pub const MAX_FIELD_LEN: usize = 500;

/// Errors raised while turning a draft into a payload.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DraftError {
    /// `participantCount` is not a base-10 integer.
    #[error("Number of players must be a whole number")]
    InvalidParticipantCount,
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

/// One of the nine text fields of the team form. The image is not a tracked field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamField {
    Teamname,
    Game,
    Role,
    Rank,
    Server,
    Language,
    Players,
    Requests,
    ParticipantCount,
}

impl TeamField {
    /// Every tracked field, in form order.
    pub const ALL: [TeamField; 9] = [
        TeamField::Teamname,
        TeamField::Game,
        TeamField::Role,
        TeamField::Rank,
        TeamField::Server,
        TeamField::Language,
        TeamField::Players,
        TeamField::Requests,
        TeamField::ParticipantCount,
    ];

    /// Form input name, matching the JSON payload key.
    pub fn key(self) -> &'static str {
        match self {
            TeamField::Teamname => "teamname",
            TeamField::Game => "game",
            TeamField::Role => "role",
            TeamField::Rank => "rank",
            TeamField::Server => "server",
            TeamField::Language => "language",
            TeamField::Players => "players",
            TeamField::Requests => "requests",
            TeamField::ParticipantCount => "participantCount",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamField::Teamname => "Team Name",
            TeamField::Game => "Game",
            TeamField::Role => "Role",
            TeamField::Rank => "Rank",
            TeamField::Server => "Server",
            TeamField::Language => "Language",
            TeamField::Players => "Players",
            TeamField::Requests => "Requests",
            TeamField::ParticipantCount => "Number of Players",
        }
    }

    /// Text shown in the preview when the field is empty.
    pub fn preview_placeholder(self) -> &'static str {
        match self {
            TeamField::Teamname => "No Team Name",
            TeamField::Game => "No Game",
            TeamField::Role => "No Role",
            TeamField::Rank => "No Rank",
            TeamField::Server => "No Server",
            TeamField::Language => "No Language",
            TeamField::Players => "No Players",
            TeamField::Requests => "No Requests",
            TeamField::ParticipantCount => "No players added",
        }
    }

    /// Hint shown inside the empty input.
    pub fn input_hint(self) -> &'static str {
        match self {
            TeamField::Teamname => "Name of your team",
            TeamField::Game => "Game your team plays",
            TeamField::Role => "Role you are recruiting for",
            TeamField::Rank => "Minimum rank",
            TeamField::Server => "Server / region",
            TeamField::Language => "Team language",
            TeamField::Players => "Player names, comma separated",
            TeamField::Requests => "Anything else applicants should know",
            TeamField::ParticipantCount => "Number of players",
        }
    }
}

/// Unsaved team form data, exactly as typed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDraft {
    pub teamname: String,
    pub game: String,
    pub role: String,
    pub rank: String,
    pub server: String,
    pub language: String,
    /// Comma separated player names.
    pub players: String,
    pub requests: String,
    pub participant_count: String,
    /// Uploaded file reference; not validated.
    #[serde(default)]
    pub image: Option<String>,
}

impl TeamDraft {
    pub fn get(&self, field: TeamField) -> &str {
        match field {
            TeamField::Teamname => &self.teamname,
            TeamField::Game => &self.game,
            TeamField::Role => &self.role,
            TeamField::Rank => &self.rank,
            TeamField::Server => &self.server,
            TeamField::Language => &self.language,
            TeamField::Players => &self.players,
            TeamField::Requests => &self.requests,
            TeamField::ParticipantCount => &self.participant_count,
        }
    }

    pub fn set(&mut self, field: TeamField, value: impl Into<String>) {
        let slot = match field {
            TeamField::Teamname => &mut self.teamname,
            TeamField::Game => &mut self.game,
            TeamField::Role => &mut self.role,
            TeamField::Rank => &mut self.rank,
            TeamField::Server => &mut self.server,
            TeamField::Language => &mut self.language,
            TeamField::Players => &mut self.players,
            TeamField::Requests => &mut self.requests,
            TeamField::ParticipantCount => &mut self.participant_count,
        };
        *slot = value.into();
    }

    /// True when every tracked field is non-empty (the image is ignored).
    pub fn is_complete(&self) -> bool {
        TeamField::ALL.iter().all(|&f| !self.get(f).is_empty())
    }

    /// First field (image included) longer than [`MAX_FIELD_LEN`].
    pub fn oversized_field(&self) -> Option<&'static str> {
        TeamField::ALL
            .iter()
            .find(|&&f| self.get(f).chars().count() > MAX_FIELD_LEN)
            .map(|f| f.label())
            .or_else(|| {
                self.image
                    .as_deref()
                    .filter(|i| i.chars().count() > MAX_FIELD_LEN)
                    .map(|_| "Image")
            })
    }

    /// Build the payload sent to the team creation endpoint.
    pub fn normalize(&self) -> Result<NewTeam, DraftError> {
        if let Some(field) = self.oversized_field() {
            return Err(DraftError::FieldTooLong {
                field,
                max: MAX_FIELD_LEN,
            });
        }
        Ok(NewTeam {
            teamname: self.teamname.clone(),
            game: self.game.clone(),
            role: self.role.clone(),
            rank: self.rank.clone(),
            server: self.server.clone(),
            language: self.language.clone(),
            players: split_players(&self.players),
            requests: self.requests.clone(),
            participant_count: parse_participant_count(&self.participant_count)?,
            image: self.image.clone().filter(|i| !i.is_empty()),
        })
    }
}

/// Split a comma separated list, trimming each name. Order and duplicates are
/// kept; tokens that are empty after trimming (e.g. from a trailing comma) are dropped.
pub fn split_players(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the participant count as a base-10 integer (surrounding whitespace allowed).
pub fn parse_participant_count(raw: &str) -> Result<u32, DraftError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| DraftError::InvalidParticipantCount)
}

/// Normalized team payload (`POST /api/teams/create-team` body).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub teamname: String,
    pub game: String,
    pub role: String,
    pub rank: String,
    pub server: String,
    pub language: String,
    pub players: Vec<String>,
    pub requests: String,
    pub participant_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A team accepted by the registry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    #[serde(flatten)]
    pub details: NewTeam,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(details: NewTeam) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_order_and_duplicates() {
        assert_eq!(split_players("b, a ,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn split_drops_empty_tokens() {
        assert_eq!(split_players("a,, b ,"), vec!["a", "b"]);
        assert!(split_players(" , ").is_empty());
    }

    #[test]
    fn oversized_field_is_rejected() {
        let draft = TeamDraft {
            requests: "x".repeat(MAX_FIELD_LEN + 1),
            participant_count: "5".to_string(),
            ..TeamDraft::default()
        };
        assert_eq!(
            draft.normalize(),
            Err(DraftError::FieldTooLong {
                field: "Requests",
                max: MAX_FIELD_LEN
            })
        );
        assert_eq!(
            DraftError::FieldTooLong {
                field: "Requests",
                max: MAX_FIELD_LEN
            }
            .to_string(),
            "Requests must be at most 500 characters"
        );
    }

    #[test]
    fn participant_count_must_be_numeric() {
        assert_eq!(parse_participant_count(" 5 "), Ok(5));
        assert_eq!(
            parse_participant_count("five"),
            Err(DraftError::InvalidParticipantCount)
        );
        assert_eq!(
            parse_participant_count("-1"),
            Err(DraftError::InvalidParticipantCount)
        );
    }
}

//! Team creation: validates a submitted team and keeps accepted teams in memory.

use crate::logic::team_form::{ApiFailure, TeamApi};
use crate::models::{NewTeam, Team, MAX_FIELD_LEN};
use async_trait::async_trait;
use std::sync::RwLock;

/// Message returned when a team is created.
pub const TEAM_CREATED_MESSAGE: &str = "Team created successfully";

/// Default number of teams the registry holds before refusing new ones.
pub const DEFAULT_TEAM_CAPACITY: usize = 10_000;

/// Errors that can occur while creating a team.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TeamError {
    /// A text field is empty (after trimming).
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The player list has no names in it.
    #[error("At least one player is required")]
    NoPlayers,
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Number of players must be at least 1")]
    InvalidParticipantCount,
    /// Team names are unique, case-insensitive.
    #[error("A team with this name already exists")]
    DuplicateTeamName,
    /// The registry holds as many teams as it is allowed to.
    #[error("Team registration is full")]
    RegistryFull,
    #[error("Team storage is unavailable")]
    Storage,
}

impl TeamError {
    /// True for errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TeamError::Storage | TeamError::RegistryFull)
    }
}

fn check_len(value: &str, field: &'static str) -> Result<(), TeamError> {
    if value.chars().count() > MAX_FIELD_LEN {
        Err(TeamError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        })
    } else {
        Ok(())
    }
}

/// Check a payload and return it with text trimmed and empty player names removed.
pub fn validate_team(team: NewTeam) -> Result<NewTeam, TeamError> {
    let trimmed = |value: String, label: &'static str| -> Result<String, TeamError> {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(TeamError::MissingField(label));
        }
        check_len(&value, label)?;
        Ok(value)
    };
    let players: Vec<String> = team
        .players
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    let validated = NewTeam {
        teamname: trimmed(team.teamname, "Team name")?,
        game: trimmed(team.game, "Game")?,
        role: trimmed(team.role, "Role")?,
        rank: trimmed(team.rank, "Rank")?,
        server: trimmed(team.server, "Server")?,
        language: trimmed(team.language, "Language")?,
        players,
        requests: trimmed(team.requests, "Requests")?,
        participant_count: team.participant_count,
        image: team.image,
    };
    for player in &validated.players {
        check_len(player, "Player name")?;
    }
    if let Some(image) = &validated.image {
        check_len(image, "Image")?;
    }
    if validated.players.is_empty() {
        return Err(TeamError::NoPlayers);
    }
    if validated.participant_count == 0 {
        return Err(TeamError::InvalidParticipantCount);
    }
    Ok(validated)
}

/// In-memory team registry, standing in for the team database. Bounded by
/// `capacity`; once full, new teams are refused rather than older ones dropped.
#[derive(Debug)]
pub struct TeamRegistry {
    teams: RwLock<Vec<Team>>,
    capacity: usize,
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TEAM_CAPACITY)
    }
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            teams: RwLock::new(Vec::new()),
            capacity,
        }
    }

    /// Validate and store a team.
    pub fn create(&self, team: NewTeam) -> Result<Team, TeamError> {
        let team = validate_team(team)?;
        let mut g = self.teams.write().map_err(|_| TeamError::Storage)?;
        let is_duplicate = g
            .iter()
            .any(|t| t.details.teamname.eq_ignore_ascii_case(&team.teamname));
        if is_duplicate {
            return Err(TeamError::DuplicateTeamName);
        }
        if g.len() >= self.capacity {
            log::warn!("Team registry full ({} teams), refusing {}", g.len(), team.teamname);
            return Err(TeamError::RegistryFull);
        }
        let team = Team::new(team);
        log::info!("Created team {} ({})", team.details.teamname, team.id);
        g.push(team.clone());
        Ok(team)
    }

    /// Snapshot of all teams, oldest first.
    pub fn teams(&self) -> Result<Vec<Team>, TeamError> {
        let g = self.teams.read().map_err(|_| TeamError::Storage)?;
        Ok(g.clone())
    }
}

/// In-process submissions: the same path `POST /api/teams/create-team` takes.
#[async_trait]
impl TeamApi for TeamRegistry {
    async fn create_team(&self, team: &NewTeam) -> Result<String, ApiFailure> {
        self.create(team.clone())
            .map(|_| TEAM_CREATED_MESSAGE.to_string())
            .map_err(|e| ApiFailure::with_message(e.to_string()))
    }
}

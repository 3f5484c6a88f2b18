//! Tournament document, its resolved form, and the derived status.

use crate::models::game::{DocumentId, Game, Organizer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a tournament.
pub type TournamentId = DocumentId;

/// Start and end of play.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentDates {
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
}

/// One prize entry. The first entry's amount doubles as the entry fee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub amount: f64,
    /// Other keys (placement, label, ...) are kept but not interpreted.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Prize {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            extra: serde_json::Map::new(),
        }
    }
}

/// Tournament document as stored: game and organizer are references by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(rename = "_id")]
    pub id: TournamentId,
    pub tournament_name: String,
    pub tournament_dates: TournamentDates,
    #[serde(default)]
    pub prize: Vec<Prize>,
    #[serde(default)]
    pub registered_number: u32,
    pub slots: u32,
    pub game_type: String,
    #[serde(default)]
    pub rules: String,
    pub game_id: DocumentId,
    pub organizer_id: DocumentId,
}

/// Tournament with both references resolved. A dangling reference resolves to `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetail {
    pub tournament: Tournament,
    pub game: Option<Game>,
    pub organizer: Option<Organizer>,
}

/// Where a tournament stands relative to now.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Not started yet; registration open.
    Open,
    /// Between start and end, both inclusive.
    Live,
    /// Past the end.
    Completed,
}

impl TournamentStatus {
    pub fn label(self) -> &'static str {
        match self {
            TournamentStatus::Open => "Open",
            TournamentStatus::Live => "Live",
            TournamentStatus::Completed => "Completed",
        }
    }

    /// CSS class of the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            TournamentStatus::Open => "bg-green-600",
            TournamentStatus::Live => "bg-yellow-600",
            TournamentStatus::Completed => "bg-red-600",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price of entering a tournament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryFee {
    Free,
    Paid(f64),
}

impl fmt::Display for EntryFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFee::Free => f.write_str("Free"),
            EntryFee::Paid(amount) => write!(f, "₹{}", format_amount(*amount)),
        }
    }
}

/// Whole amounts without decimals, others with two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

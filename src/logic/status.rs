//! Status: Open / Live / Completed from the current time and the tournament dates.

use crate::models::{TournamentDates, TournamentStatus};
use chrono::{DateTime, Utc};

/// `Open` before the start, `Completed` after the end, `Live` otherwise.
/// An instant equal to either boundary is `Live`.
pub fn derive_status(
    now: DateTime<Utc>,
    started: DateTime<Utc>,
    ended: DateTime<Utc>,
) -> TournamentStatus {
    if now < started {
        TournamentStatus::Open
    } else if now > ended {
        TournamentStatus::Completed
    } else {
        TournamentStatus::Live
    }
}

/// Same as [`derive_status`], reading the boundaries from `dates`.
pub fn status_at(dates: &TournamentDates, now: DateTime<Utc>) -> TournamentStatus {
    derive_status(now, dates.started, dates.ended)
}

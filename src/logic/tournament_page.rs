//! Tournament detail page: fetch with guard clauses, and the derived display values.

use crate::logic::prize::{entry_fee, prize_pool};
use crate::logic::status::status_at;
use crate::models::{format_amount, TournamentDetail, TournamentStatus};
use crate::store::TournamentStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const PLACEHOLDER_BANNER: &str = "/placeholder-tournament.jpg";
pub const PLACEHOLDER_ORGANIZER_PHOTO: &str = "/placeholder-organizer.jpg";
pub const UNKNOWN_ORGANIZER: &str = "Unknown Organizer";
pub const NO_DESCRIPTION: &str = "No description available";

/// Fetch a tournament with its game and organizer resolved.
///
/// A missing or empty id returns `None` without touching the store. Store
/// errors are logged and reported as `None`, same as a missing record.
pub async fn fetch_tournament<S>(store: &S, id: Option<&str>) -> Option<TournamentDetail>
where
    S: TournamentStore + ?Sized,
{
    let id = match id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::error!("Tournament ID is undefined");
            return None;
        }
    };
    match store.find_tournament(id).await {
        Ok(found) => found,
        Err(e) => {
            log::error!("Error fetching tournament {}: {}", id, e);
            None
        }
    }
}

/// Everything the detail page shows, already formatted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentView {
    pub id: String,
    pub name: String,
    pub banner_photo: String,
    pub start_date: String,
    pub start_time: String,
    pub starts_at: String,
    pub ends_at: String,
    pub prize_pool: String,
    pub participants: String,
    pub mode: String,
    pub entry_fee: String,
    pub status: TournamentStatus,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub host_name: String,
    pub host_photo: String,
    pub description: String,
    pub rules: String,
    pub register_href: String,
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format("%-I:%M %p UTC").to_string()
}

fn format_date_time(at: DateTime<Utc>) -> String {
    format!("{} {}", format_date(at), format_time(at))
}

impl TournamentView {
    /// Derive display values as of `now`.
    pub fn derive(detail: &TournamentDetail, now: DateTime<Utc>) -> Self {
        let t = &detail.tournament;
        let dates = &t.tournament_dates;
        let status = status_at(dates, now);
        let game = detail.game.as_ref();
        let organizer = detail.organizer.as_ref();
        Self {
            id: t.id.clone(),
            name: t.tournament_name.clone(),
            banner_photo: game
                .and_then(|g| g.game_banner_photo.clone())
                .unwrap_or_else(|| PLACEHOLDER_BANNER.to_string()),
            start_date: format_date(dates.started),
            start_time: format_time(dates.started),
            starts_at: format_date_time(dates.started),
            ends_at: format_date_time(dates.ended),
            prize_pool: format!("${}", format_amount(prize_pool(&t.prize))),
            participants: format!("{}/{}", t.registered_number, t.slots),
            mode: t.game_type.clone(),
            entry_fee: entry_fee(&t.prize).to_string(),
            status,
            status_label: status.label(),
            badge_class: status.badge_class(),
            host_name: organizer
                .and_then(|o| o.org_name.clone())
                .unwrap_or_else(|| UNKNOWN_ORGANIZER.to_string()),
            host_photo: organizer
                .and_then(|o| o.banner_photo.clone())
                .unwrap_or_else(|| PLACEHOLDER_ORGANIZER_PHOTO.to_string()),
            description: game
                .and_then(|g| g.profile.clone())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            rules: t.rules.clone(),
            register_href: format!("/register/{}", t.id),
        }
    }
}

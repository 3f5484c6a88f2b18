//! Business logic: team form and creation, tournament status and display, caching.

mod cache;
mod prize;
mod status;
mod team_form;
mod team_registry;
mod tournament_page;

pub use cache::{RevalidationCache, DEFAULT_REVALIDATE};
pub use prize::{entry_fee, prize_pool};
pub use status::{derive_status, status_at};
pub use team_form::{
    render_preview, ApiFailure, FormMode, PreviewModel, PreviewRow, SubmitOutcome, TeamApi,
    TeamForm, FALLBACK_ERROR_MESSAGE,
};
pub use team_registry::{
    validate_team, TeamError, TeamRegistry, DEFAULT_TEAM_CAPACITY, TEAM_CREATED_MESSAGE,
};
pub use tournament_page::{
    fetch_tournament, TournamentView, NO_DESCRIPTION, PLACEHOLDER_BANNER,
    PLACEHOLDER_ORGANIZER_PHOTO, UNKNOWN_ORGANIZER,
};

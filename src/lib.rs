//! Esports tournament web app: library with models, business logic, store, and HTTP layer.

pub mod client;
pub mod config;
pub mod drafts;
pub mod logic;
pub mod models;
pub mod render;
pub mod store;
pub mod web;

pub use client::HttpTeamApi;
pub use config::ServerConfig;
pub use drafts::{DraftStore, FormSession};
pub use logic::{
    derive_status, entry_fee, fetch_tournament, prize_pool, render_preview, ApiFailure,
    FormMode, PreviewModel, RevalidationCache, SubmitOutcome, TeamApi, TeamError, TeamForm,
    TeamRegistry, TournamentView,
};
pub use models::{
    EntryFee, Game, NewTeam, Organizer, Prize, Team, TeamDraft, TeamField, Tournament,
    TournamentDates, TournamentDetail, TournamentId, TournamentStatus,
};
pub use store::{MemoryStore, StoreError, TournamentStore};

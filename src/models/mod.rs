//! Data structures: team drafts and payloads, tournaments and the records they reference.

mod game;
mod team;
mod tournament;

pub use game::{DocumentId, Game, Organizer};
pub use team::{
    parse_participant_count, split_players, DraftError, NewTeam, Team, TeamDraft, TeamField,
    TeamId, MAX_FIELD_LEN,
};
pub use tournament::{
    format_amount, EntryFee, Prize, Tournament, TournamentDates, TournamentDetail,
    TournamentId, TournamentStatus,
};

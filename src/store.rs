//! Tournament document store: lookup by id with game and organizer resolved.

use crate::models::{DocumentId, Game, Organizer, Tournament, TournamentDetail};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

/// Errors from loading or querying the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tournament data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tournament store lock poisoned")]
    Poisoned,
}

/// Read access to tournaments.
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Tournament by id with `gameId` and `organizerId` replaced by the records
    /// they point to. `Ok(None)` when no tournament has this id.
    async fn find_tournament(&self, id: &str) -> Result<Option<TournamentDetail>, StoreError>;
}

/// Seed file layout: one array per collection.
#[derive(Debug, Default, Deserialize)]
pub struct Documents {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub organizers: Vec<Organizer>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

#[derive(Debug, Default)]
struct Collections {
    games: HashMap<DocumentId, Game>,
    organizers: HashMap<DocumentId, Organizer>,
    tournaments: HashMap<DocumentId, Tournament>,
}

/// In-memory store, usually seeded from a JSON file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new(docs: Documents) -> Self {
        let collections = Collections {
            games: docs.games.into_iter().map(|g| (g.id.clone(), g)).collect(),
            organizers: docs
                .organizers
                .into_iter()
                .map(|o| (o.id.clone(), o))
                .collect(),
            tournaments: docs
                .tournaments
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect(),
        };
        Self {
            collections: RwLock::new(collections),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let docs: Documents = serde_json::from_str(json)?;
        Ok(Self::new(docs))
    }

    /// Load a seed file (`{games, organizers, tournaments}`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} tournament(s) from {}",
            store.tournament_count(),
            path.display()
        );
        Ok(store)
    }

    pub fn tournament_count(&self) -> usize {
        self.collections
            .read()
            .map(|c| c.tournaments.len())
            .unwrap_or(0)
    }

    pub fn insert_game(&self, game: Game) -> Result<(), StoreError> {
        let mut c = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        c.games.insert(game.id.clone(), game);
        Ok(())
    }

    pub fn insert_organizer(&self, organizer: Organizer) -> Result<(), StoreError> {
        let mut c = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        c.organizers.insert(organizer.id.clone(), organizer);
        Ok(())
    }

    pub fn insert_tournament(&self, tournament: Tournament) -> Result<(), StoreError> {
        let mut c = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        c.tournaments.insert(tournament.id.clone(), tournament);
        Ok(())
    }
}

#[async_trait]
impl TournamentStore for MemoryStore {
    async fn find_tournament(&self, id: &str) -> Result<Option<TournamentDetail>, StoreError> {
        let c = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        let Some(tournament) = c.tournaments.get(id) else {
            return Ok(None);
        };
        Ok(Some(TournamentDetail {
            game: c.games.get(&tournament.game_id).cloned(),
            organizer: c.organizers.get(&tournament.organizer_id).cloned(),
            tournament: tournament.clone(),
        }))
    }
}

//! Server-side team form drafts. The browser session only carries a draft id.

use crate::logic::TeamForm;
use crate::render::Toast;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Identifier stored in the session cookie.
pub type DraftId = Uuid;

/// Drafts not touched for this long are removed.
pub const DRAFT_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(6 * 3600);

/// Most drafts kept at once; the least recently used one is evicted beyond this.
pub const DEFAULT_DRAFT_CAPACITY: usize = 10_000;

/// Everything the team form page needs between requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSession {
    pub form: TeamForm,
    /// Shown once on the next page load.
    pub toast: Option<Toast>,
}

/// Per-draft entry: form state + last activity time (for cleanup).
#[derive(Debug)]
struct DraftEntry {
    session: FormSession,
    last_activity: Instant,
}

#[derive(Debug)]
pub struct DraftStore {
    entries: RwLock<HashMap<DraftId, DraftEntry>>,
    capacity: usize,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DRAFT_CAPACITY)
    }
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Stored session for `id`, or an empty one for a missing or unknown id.
    pub fn load(&self, id: Option<DraftId>) -> FormSession {
        let Some(id) = id else {
            return FormSession::default();
        };
        self.entries
            .read()
            .ok()
            .and_then(|g| g.get(&id).map(|e| e.session.clone()))
            .unwrap_or_default()
    }

    /// Store `session` under `id` (a new id when none is given) and return the id.
    pub fn save(&self, id: Option<DraftId>, session: FormSession, now: Instant) -> DraftId {
        let id = id.unwrap_or_else(Uuid::new_v4);
        let mut g = match self.entries.write() {
            Ok(guard) => guard,
            Err(_) => {
                log::error!("Draft store lock poisoned, draft {} not saved", id);
                return id;
            }
        };
        if !g.contains_key(&id) && g.len() >= self.capacity {
            let oldest = g
                .iter()
                .min_by_key(|(_, e)| e.last_activity)
                .map(|(k, _)| *k);
            if let Some(oldest) = oldest {
                g.remove(&oldest);
                log::warn!("Draft store full, evicted draft {}", oldest);
            }
        }
        g.insert(
            id,
            DraftEntry {
                session,
                last_activity: now,
            },
        );
        id
    }

    /// Remove drafts inactive for [`DRAFT_INACTIVITY_TIMEOUT`]; returns how many.
    pub fn purge_inactive(&self, now: Instant) -> usize {
        let Ok(mut g) = self.entries.write() else {
            return 0;
        };
        let before = g.len();
        g.retain(|_, e| now.saturating_duration_since(e.last_activity) < DRAFT_INACTIVITY_TIMEOUT);
        before - g.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamField;

    fn session_with_name(name: &str) -> FormSession {
        let mut form = TeamForm::new();
        form.set_field(TeamField::Teamname, name);
        FormSession { form, toast: None }
    }

    #[test]
    fn unknown_id_loads_empty_session() {
        let store = DraftStore::new();
        assert_eq!(store.load(None), FormSession::default());
        assert_eq!(store.load(Some(Uuid::new_v4())), FormSession::default());
    }

    #[test]
    fn save_then_load_keeps_long_fields() {
        let store = DraftStore::new();
        let long = "x".repeat(5000);
        let id = store.save(None, session_with_name(&long), Instant::now());
        assert_eq!(store.load(Some(id)).form.value(TeamField::Teamname), long);
    }

    #[test]
    fn full_store_evicts_least_recent() {
        let start = Instant::now();
        let store = DraftStore::with_capacity(2);
        let a = store.save(None, session_with_name("a"), start);
        let b = store.save(None, session_with_name("b"), start + Duration::from_secs(1));
        // Updating an existing draft never evicts.
        store.save(Some(a), session_with_name("a2"), start + Duration::from_secs(2));
        assert_eq!(store.len(), 2);

        let c = store.save(None, session_with_name("c"), start + Duration::from_secs(3));
        assert_eq!(store.len(), 2);
        assert_eq!(store.load(Some(b)), FormSession::default());
        assert_eq!(store.load(Some(a)).form.value(TeamField::Teamname), "a2");
        assert_eq!(store.load(Some(c)).form.value(TeamField::Teamname), "c");
    }

    #[test]
    fn purge_drops_inactive_drafts() {
        let start = Instant::now();
        let store = DraftStore::new();
        store.save(None, session_with_name("old"), start);
        let fresh = store.save(None, session_with_name("fresh"), start + DRAFT_INACTIVITY_TIMEOUT);
        assert_eq!(store.purge_inactive(start + DRAFT_INACTIVITY_TIMEOUT), 1);
        assert_eq!(store.load(Some(fresh)).form.value(TeamField::Teamname), "fresh");
    }
}

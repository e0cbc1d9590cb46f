use chrono::Utc;
use std::collections::HashSet;

use crate::error::StoreResult;
use crate::models::{SessionStats, SessionView};
use crate::store::Store;

pub fn get_active_sessions(store: &Store) -> StoreResult<Vec<SessionView>> {
    store.active_sessions(Utc::now())
}

pub fn end_session(store: &Store, id: &str) -> StoreResult<()> {
    store.end_session(id)
}

/// Case-insensitive match on the account name; an empty term keeps everything.
pub fn search_sessions<'a>(sessions: &'a [SessionView], term: &str) -> Vec<&'a SessionView> {
    let term = term.to_lowercase();
    sessions
        .iter()
        .filter(|s| s.session.account_name.to_lowercase().contains(&term))
        .collect()
}

pub fn session_stats(sessions: &[SessionView]) -> SessionStats {
    if sessions.is_empty() {
        return SessionStats::default();
    }

    let unique_workstations = sessions
        .iter()
        .map(|s| s.session.workstation_number)
        .collect::<HashSet<_>>()
        .len();
    let total_minutes: i64 = sessions.iter().map(|s| s.elapsed_minutes).sum();
    let average_minutes = (total_minutes as f64 / sessions.len() as f64).round() as i64;

    SessionStats {
        total: sessions.len(),
        unique_workstations,
        average_minutes,
    }
}

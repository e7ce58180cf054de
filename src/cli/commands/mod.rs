//! Command implementations for studyflow.

mod run;
mod session;
mod shell;
mod stats;

pub use run::start;
pub use session::{add, delete, list, show};
pub use shell::completions;
pub use stats::stats;

use uuid::Uuid;

use crate::core::SessionRegistry;
use crate::error::StudyFlowError;
use crate::output::short_id;
use crate::storage::SnapshotStore;

/// Open the snapshot store and rebuild the registry from it.
///
/// Every command starts here; mutating commands save the registry's
/// session list back through the same store before returning.
pub(crate) fn open_registry() -> Result<(SessionRegistry, SnapshotStore), StudyFlowError> {
    let store = SnapshotStore::open()?;
    let registry = SessionRegistry::restore(store.load()?);
    Ok((registry, store))
}

/// Resolve a full session id or a unique id prefix to a session id.
///
/// # Errors
///
/// Returns `NotFound` when nothing matches and `Config` when the prefix
/// is ambiguous.
pub(crate) fn resolve_id(registry: &SessionRegistry, input: &str) -> Result<Uuid, StudyFlowError> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let needle = input.to_lowercase();
    let matches: Vec<Uuid> = registry
        .sessions()
        .iter()
        .filter(|s| s.id.to_string().starts_with(&needle))
        .map(|s| s.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(StudyFlowError::NotFound(format!(
            "No session matching '{input}'"
        ))),
        _ => Err(StudyFlowError::Config(format!(
            "Session id prefix '{input}' is ambiguous ({} matches)",
            matches.len()
        ))),
    }
}

/// One-line confirmation for a session, used by add/delete output.
pub(crate) fn session_line(registry: &SessionRegistry, id: Uuid) -> Option<String> {
    registry
        .get(id)
        .map(|s| format!("{} {}", short_id(s), s.title))
}

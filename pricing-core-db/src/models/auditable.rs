use uuid::Uuid;

use super::identifiable::Identifiable;

/// Trait for entities whose changes are recorded in a history log
pub trait Auditable: Identifiable {
    /// Returns the ID of the newest history entry for this entity, if any
    fn get_last_history_entry_id(&self) -> Option<Uuid>;

    /// Returns the integrity hash of the entity's current state
    fn get_hash(&self) -> i64;
}

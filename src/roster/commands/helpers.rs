use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::store::RecordStore;

/// Loads the collection, reading a store that was never written as empty.
pub fn load_or_empty<S: RecordStore>(store: &S) -> Result<Vec<Employee>> {
    match store.load() {
        Err(RosterError::Absent(path)) => {
            tracing::debug!(
                path = %path.display(),
                "Records file absent, using empty collection"
            );
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Position of the first record with `id`.
pub fn position_of(employees: &[Employee], id: i64) -> Result<usize> {
    employees
        .iter()
        .position(|e| e.id == id)
        .ok_or(RosterError::NotFound(id))
}

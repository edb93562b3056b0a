use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

use super::helpers::load_or_empty;

/// Appends `employee` unless its id is already taken.
///
/// A taken id is not an error: nothing is written and the result carries a
/// warning message instead.
pub fn run<S: RecordStore>(store: &S, employee: Employee) -> Result<CmdResult> {
    let existing = load_or_empty(store)?;
    let mut result = CmdResult::default();

    if existing.iter().any(|e| e.id == employee.id) {
        tracing::warn!(id = employee.id, "ID is already present, skipping create");
        result.add_message(CmdMessage::warning(format!(
            "ID {} is already present in database.",
            employee.id
        )));
        return Ok(result);
    }

    store.append(&employee)?;
    tracing::info!(id = employee.id, "Employee created");
    result.add_message(CmdMessage::success(format!(
        "Employee with ID {} created successfully",
        employee.id
    )));
    Ok(result.with_affected(vec![employee]))
}

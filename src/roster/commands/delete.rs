use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::{load_or_empty, position_of};

/// Removes the first employee with `id` and rewrites the store.
pub fn run<S: RecordStore>(store: &S, id: i64) -> Result<CmdResult> {
    let mut employees = load_or_empty(store)?;
    let index = position_of(&employees, id)?;
    let removed = employees.remove(index);

    store.rewrite(&employees)?;
    tracing::info!(id, remaining = employees.len(), "Employee deleted");

    let mut result = CmdResult::default().with_affected(vec![removed]);
    result.add_message(CmdMessage::success(format!(
        "Employee with ID {} deleted successfully",
        id
    )));
    Ok(result)
}

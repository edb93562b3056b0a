use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::{load_or_empty, position_of};

/// Looks up the first employee with `id`.
pub fn run<S: RecordStore>(store: &S, id: i64) -> Result<CmdResult> {
    let mut employees = load_or_empty(store)?;
    let index = position_of(&employees, id)?;
    let employee = employees.swap_remove(index);
    Ok(CmdResult::default().with_listed(vec![employee]))
}

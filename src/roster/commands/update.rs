use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FieldUpdate;
use crate::store::RecordStore;

use super::helpers::{load_or_empty, position_of};

/// Applies `updates` to the first employee with `id` and rewrites the store.
///
/// Empty text values are skipped. The store is rewritten even when no update
/// applied.
pub fn run<S: RecordStore>(store: &S, id: i64, updates: &[FieldUpdate]) -> Result<CmdResult> {
    let mut employees = load_or_empty(store)?;
    let index = position_of(&employees, id)?;

    let target = &mut employees[index];
    for update in updates {
        if !update.apply(target) {
            tracing::debug!(id, field = update.field_name(), "Ignoring empty update value");
        }
    }
    let updated = target.clone();

    store.rewrite(&employees)?;
    tracing::info!(id, fields = updates.len(), "Employee updated");

    let mut result = CmdResult::default().with_affected(vec![updated]);
    result.add_message(CmdMessage::success(format!(
        "Employee with ID {} updated successfully",
        id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::{employee, StoreFixture};

    #[test]
    fn changes_only_the_requested_field() {
        let fixture = StoreFixture::new().with_staff();
        let mut expected = fixture.employees().to_vec();
        let store = fixture.build();

        run(&store, 2, &[FieldUpdate::Role("Director".into())]).unwrap();

        expected[1].role = "Director".into();
        assert_eq!(list::run(&store).unwrap().listed, expected);
    }

    #[test]
    fn empty_first_name_is_ignored() {
        let fixture = StoreFixture::new().with_staff();
        let before = fixture.employees().to_vec();
        let store = fixture.build();

        let result = run(&store, 1, &[FieldUpdate::FirstName(String::new())]).unwrap();

        assert_eq!(result.affected[0].first_name, "Ann");
        assert_eq!(list::run(&store).unwrap().listed, before);
    }

    #[test]
    fn salary_and_text_updates_combine() {
        let store = StoreFixture::new().with_staff().build();
        let updates = [
            FieldUpdate::Salary(60000.0),
            FieldUpdate::Email("ann@corp.io".into()),
            FieldUpdate::Birthdate(String::new()),
        ];

        let result = run(&store, 1, &updates).unwrap();
        let updated = &result.affected[0];
        assert_eq!(updated.salary, 60000.0);
        assert_eq!(updated.email, "ann@corp.io");
        assert_eq!(updated.birthdate, "1990-01-01");
    }

    #[test]
    fn only_first_duplicate_is_updated() {
        let store = StoreFixture::new()
            .with_employee(employee(5, "One", "Dup", "Dev"))
            .with_employee(employee(5, "Two", "Dup", "Dev"))
            .build();

        run(&store, 5, &[FieldUpdate::Role("Ops".into())]).unwrap();

        let listed = list::run(&store).unwrap().listed;
        assert_eq!(listed[0].role, "Ops");
        assert_eq!(listed[1].role, "Dev");
    }

    #[test]
    fn unknown_id_is_not_found_and_nothing_is_written() {
        let store = StoreFixture::new().with_staff().build();
        let err = run(&store, 42, &[FieldUpdate::Role("X".into())]).unwrap_err();

        assert!(matches!(err, RosterError::NotFound(42)));
        assert_eq!(store.writes(), 0);
    }
}

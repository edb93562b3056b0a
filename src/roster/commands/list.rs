use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::load_or_empty;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let employees = load_or_empty(store)?;
    Ok(CmdResult::default().with_listed(employees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_stored_order() {
        let fixture = StoreFixture::new().with_staff();
        let expected = fixture.employees().to_vec();
        let store = fixture.build();

        let result = run(&store).unwrap();
        assert_eq!(result.listed, expected);
    }

    #[test]
    fn absent_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed.is_empty());
    }
}

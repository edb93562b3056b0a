//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for both clients: the HTTP service and the command line.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**, e.g. an untyped JSON field mapping becomes a list
//!   of typed [`FieldUpdate`]s before it reaches the update command
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no presentation and holds no state besides the store handle, so
//! every call re-reads the records file.
//!
//! ## Generic Over RecordStore
//!
//! - Production: `RosterApi<CsvStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, FieldUpdate};
use crate::store::RecordStore;
use serde_json::{Map, Value};

pub struct RosterApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_employee(&self, id: i64) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn search_employees(&self, filter: &SearchFilter) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, filter)
    }

    pub fn create_employee(&self, employee: Employee) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, employee)
    }

    pub fn update_employee(
        &self,
        id: i64,
        updates: &[FieldUpdate],
    ) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, id, updates)
    }

    /// Update from an untyped field mapping, as sent in a PATCH body.
    pub fn patch_employee(
        &self,
        id: i64,
        fields: &Map<String, Value>,
    ) -> Result<commands::CmdResult> {
        let updates = FieldUpdate::from_map(fields);
        commands::update::run(&self.store, id, &updates)
    }

    pub fn delete_employee(&self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }
}

pub use commands::search::SearchFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

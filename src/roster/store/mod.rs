//! # Storage Layer
//!
//! The [`RecordStore`] trait is the persistence seam for the employee
//! collection. It exposes whole-collection primitives only: read everything,
//! append one record, or replace everything. The CRUD rules (duplicate ids,
//! partial updates, first-match deletes) live in `commands/`, on top of these
//! primitives.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production store backed by a single CSV file
//!   - Header row followed by one row per employee, see [`crate::codec`]
//!   - Every call opens the file, does its work and closes it again
//!
//! - [`memory::InMemoryStore`]: In-memory store for testing
//!   - Starts out absent, like a file that was never written
//!   - Counts writes so tests can assert that nothing was persisted
//!
//! ## Absence
//!
//! `load` reports a store that was never written as
//! [`RosterError::Absent`](crate::error::RosterError::Absent), which callers
//! can tell apart from a broken file. Commands treat it as an empty
//! collection.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

pub trait RecordStore {
    /// Read the whole collection in stored order.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Add one record after the existing ones, creating the store if needed.
    fn append(&self, employee: &Employee) -> Result<()>;

    /// Replace the whole collection.
    fn rewrite(&self, employees: &[Employee]) -> Result<()>;
}

use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Record store kept in memory, for tests.
///
/// `None` stands for a store that has never been written, mirroring a
/// missing CSV file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Option<Vec<Employee>>>,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            records: Mutex::new(Some(employees)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `append` and `rewrite` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn records(&self) -> MutexGuard<'_, Option<Vec<Employee>>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        self.records()
            .clone()
            .ok_or_else(|| RosterError::Absent(PathBuf::from("<memory>")))
    }

    fn append(&self, employee: &Employee) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records()
            .get_or_insert_with(Vec::new)
            .push(employee.clone());
        Ok(())
    }

    fn rewrite(&self, employees: &[Employee]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.records() = Some(employees.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn employee(id: i64, first_name: &str, last_name: &str, role: &str) -> Employee {
        Employee {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!(
                "{}.{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            password: "changeme".to_string(),
            phone_no: format!("555-01{:02}", id),
            role: role.to_string(),
            salary: 40000.0 + id as f64 * 1000.0,
            birthdate: "1990-01-01".to_string(),
        }
    }

    pub struct StoreFixture {
        employees: Vec<Employee>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                employees: Vec::new(),
            }
        }

        pub fn with_employee(mut self, employee: Employee) -> Self {
            self.employees.push(employee);
            self
        }

        /// Ann Doe (1), Bob Smith (2), Carla Doerr (3), Dan Stone (4).
        pub fn with_staff(self) -> Self {
            self.with_employee(employee(1, "Ann", "Doe", "Engineer"))
                .with_employee(employee(2, "Bob", "Smith", "Manager"))
                .with_employee(employee(3, "Carla", "Doerr", "Engineer"))
                .with_employee(employee(4, "Dan", "Stone", "Designer"))
        }

        pub fn employees(&self) -> &[Employee] {
            &self.employees
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_employees(self.employees)
        }
    }
}

use super::RecordStore;
use crate::codec::{self, HEADER};
use crate::error::{Result, RosterError};
use crate::model::Employee;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Record store persisted as one CSV file.
///
/// There is no locking: two writers racing on the same file can lose updates
/// or leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_for_read(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RosterError::Absent(self.path.clone()),
            _ => RosterError::Io(e),
        })
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let file = self.open_for_read()?;
        let mut rows = codec::reader(file);
        let mut employees = Vec::new();

        for (row, record) in rows.records().enumerate() {
            let record = record?;
            // Row 0 is the header, whatever it contains.
            if row == 0 {
                continue;
            }
            match codec::decode(&record)? {
                Some(employee) => employees.push(employee),
                None => tracing::warn!(
                    row,
                    fields = record.len(),
                    "Skipping record: insufficient fields"
                ),
            }
        }

        tracing::debug!(
            count = employees.len(),
            path = %self.path.display(),
            "Retrieved employees from the records file"
        );
        Ok(employees)
    }

    fn append(&self, employee: &Employee) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let is_new = file.metadata()?.len() == 0;

        let mut out = codec::writer(file);
        if is_new {
            out.write_record(HEADER)?;
        }
        out.write_record(codec::encode(employee))?;
        out.flush()?;
        Ok(())
    }

    fn rewrite(&self, employees: &[Employee]) -> Result<()> {
        let file = File::create(&self.path)?;

        let mut out = codec::writer(file);
        out.write_record(HEADER)?;
        for employee in employees {
            out.write_record(codec::encode(employee))?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER_LINE: &str = "ID,FirstName,LastName,Email,Password,PhoneNo,Role,Salary,Birthdate\n";

    fn employee(id: i64, first_name: &str, salary: f64) -> Employee {
        Employee {
            id,
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            role: "Engineer".to_string(),
            salary,
            ..Employee::default()
        }
    }

    #[test]
    fn load_reports_missing_file_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("employees.csv"));

        let err = store.load().unwrap_err();
        assert!(err.is_absent());
    }

    #[test]
    fn first_append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let store = CsvStore::new(&path);

        store.append(&employee(1, "Ann", 50000.5)).unwrap();
        store.append(&employee(2, "Bob", 42000.0)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            format!(
                "{}1,Ann,Doe,ann@example.com,,,Engineer,50000.5,\n\
                 2,Bob,Doe,bob@example.com,,,Engineer,42000,\n",
                HEADER_LINE
            )
        );
        assert_eq!(text.matches("FirstName").count(), 1);
    }

    #[test]
    fn load_skips_header_and_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            format!(
                "{}1,Ann,Doe,a@x.io,pw,555,Dev,50000.5,1990-01-01\n2,Bob\n3,Cy,Roe,c@x.io,,,QA,1,\n",
                HEADER_LINE
            ),
        )
        .unwrap();

        let employees = CsvStore::new(&path).load().unwrap();
        let ids: Vec<_> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(employees[0].salary, 50000.5);
        assert_eq!(employees[0].birthdate, "1990-01-01");
    }

    #[test]
    fn load_fails_on_bad_salary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, format!("{}9,Ann,Doe,a@x.io,,,Dev,n/a,\n", HEADER_LINE)).unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RosterError::MalformedSalary { id: 9, .. }));
    }

    #[test]
    fn empty_file_loads_as_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, "").unwrap();

        assert!(CsvStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn rewrite_replaces_contents_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let store = CsvStore::new(&path);
        store.append(&employee(1, "Ann", 1.0)).unwrap();

        let replacement = vec![employee(5, "Eve", 2.5), employee(4, "Dan", 3.0)];
        store.rewrite(&replacement).unwrap();

        assert_eq!(store.load().unwrap(), replacement);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(HEADER_LINE));
        assert!(!text.contains("Ann"));
    }

    #[test]
    fn append_to_existing_empty_file_writes_header_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, "").unwrap();

        CsvStore::new(&path)
            .append(&employee(7, "Gus", 60000.0))
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            format!("{}7,Gus,Doe,gus@example.com,,,Engineer,60000,\n", HEADER_LINE)
        );
    }

    #[test]
    fn invalid_utf8_in_header_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let mut bytes = b"ID,First\xffName,LastName,Email,".to_vec();
        bytes.extend_from_slice(b"Password,PhoneNo,Role,Salary,Birthdate\n");
        bytes.extend_from_slice(b"1,Ann,Doe,a@x.io,,,Dev,1,\n");
        fs::write(&path, bytes).unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RosterError::Csv(_)));
    }

    #[test]
    fn io_errors_other_than_missing_are_not_absence() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a records file.
        let store = CsvStore::new(dir.path());

        let err = store.load().unwrap_err();
        assert!(!err.is_absent());
        assert!(matches!(err, RosterError::Csv(_) | RosterError::Io(_)));
    }
}

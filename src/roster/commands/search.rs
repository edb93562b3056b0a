use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;
use serde::Deserialize;

use super::helpers::load_or_empty;

/// Case-insensitive substring patterns. An absent or empty pattern matches
/// every record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl SearchFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        contains_ignore_case(&employee.first_name, self.first_name.as_deref())
            && contains_ignore_case(&employee.last_name, self.last_name.as_deref())
            && contains_ignore_case(&employee.email, self.email.as_deref())
            && contains_ignore_case(&employee.role, self.role.as_deref())
    }
}

fn contains_ignore_case(field: &str, pattern: Option<&str>) -> bool {
    match pattern {
        None | Some("") => true,
        Some(pattern) => field.to_lowercase().contains(&pattern.to_lowercase()),
    }
}

pub fn run<S: RecordStore>(store: &S, filter: &SearchFilter) -> Result<CmdResult> {
    let matched = load_or_empty(store)?
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect();
    Ok(CmdResult::default().with_listed(matched))
}

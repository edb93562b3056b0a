use crate::model::Employee;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command: records read, records written, and messages for
/// whoever is presenting the result.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Employee>,
    pub affected: Vec<Employee>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }

    pub fn with_affected(mut self, employees: Vec<Employee>) -> Self {
        self.affected = employees;
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}

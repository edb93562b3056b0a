use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::error::Result;
use roster::model::Employee;

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 28;
const ROLE_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    let id_width = employees
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    for employee in employees {
        let name = format!("{} {}", employee.first_name, employee.last_name);
        println!(
            "{}  {}  {}  {}  {}",
            format!("{:>width$}", employee.id, width = id_width).yellow(),
            pad(&name, NAME_WIDTH).bold(),
            pad(&employee.email, EMAIL_WIDTH),
            pad(&employee.role, ROLE_WIDTH).cyan(),
            employee.salary.to_string().dimmed(),
        );
    }
}

pub fn print_employee(employee: &Employee) {
    println!(
        "{} {} {}",
        employee.id.to_string().yellow(),
        employee.first_name.bold(),
        employee.last_name.bold()
    );
    println!("--------------------------------");
    let rows = [
        ("Email", employee.email.clone()),
        ("Phone", employee.phone_no.clone()),
        ("Role", employee.role.clone()),
        ("Salary", employee.salary.to_string()),
        ("Birthdate", employee.birthdate.clone()),
    ];
    for (label, value) in rows {
        println!("{} {}", format!("{:<10}", label).dimmed(), value);
    }
}

/// Pads or truncates to exactly `width` characters.
fn pad(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        return format!("{}{}", s, " ".repeat(width - count));
    }
    let mut truncated: String = s.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

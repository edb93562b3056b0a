use clap::{Args, Parser, Subcommand};
use roster::model::{Employee, FieldUpdate};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Employee records over HTTP, kept in a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Records file (overrides the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file (defaults to config.json in the user config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List all employees
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one employee
    #[command(alias = "v")]
    Show {
        id: i64,

        /// Print JSON instead of a detail view
        #[arg(long)]
        json: bool,
    },

    /// Search by case-insensitive substrings
    Search {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add an employee (a taken id is skipped with a warning)
    #[command(alias = "n")]
    Add(AddArgs),

    /// Change selected fields of an employee
    #[command(alias = "u")]
    Update {
        id: i64,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete an employee
    #[command(alias = "rm")]
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub phone_no: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub salary: Option<f64>,

    #[arg(long)]
    pub birthdate: Option<String>,
}

impl AddArgs {
    pub fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            phone_no: self.phone_no.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            birthdate: self.birthdate.unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub phone_no: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub salary: Option<f64>,

    #[arg(long)]
    pub birthdate: Option<String>,
}

impl UpdateArgs {
    pub fn into_updates(self) -> Vec<FieldUpdate> {
        let mut updates = Vec::new();
        updates.extend(self.first_name.map(FieldUpdate::FirstName));
        updates.extend(self.last_name.map(FieldUpdate::LastName));
        updates.extend(self.email.map(FieldUpdate::Email));
        updates.extend(self.password.map(FieldUpdate::Password));
        updates.extend(self.phone_no.map(FieldUpdate::PhoneNo));
        updates.extend(self.role.map(FieldUpdate::Role));
        updates.extend(self.salary.map(FieldUpdate::Salary));
        updates.extend(self.birthdate.map(FieldUpdate::Birthdate));
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn update_collects_only_given_fields() {
        let cli = Cli::parse_from(["roster", "update", "3", "--role", "Lead", "--salary", "70000"]);
        let Some(Commands::Update { id, fields }) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(id, 3);
        assert_eq!(
            fields.into_updates(),
            vec![FieldUpdate::Role("Lead".into()), FieldUpdate::Salary(70000.0)]
        );
    }

    #[test]
    fn file_flag_is_global() {
        let cli = Cli::parse_from(["roster", "list", "--file", "staff.csv"]);
        assert_eq!(cli.file, Some(PathBuf::from("staff.csv")));
    }
}

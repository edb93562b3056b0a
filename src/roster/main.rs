use clap::Parser;
use directories::ProjectDirs;
use roster::api::{RosterApi, SearchFilter};
use roster::config::{RosterConfig, CONFIG_FILENAME};
use roster::error::Result;
use roster::logging::init_logger;
use roster::store::fs::CsvStore;
use std::path::PathBuf;

mod args;
mod cli;
use args::{AddArgs, Cli, Commands, UpdateArgs};
use cli::print::{print_employee, print_employees, print_json, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<CsvStore>,
    config: RosterConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logger(&config.log_level, cli.verbose);

    let mut ctx = AppContext {
        api: RosterApi::new(CsvStore::new(&config.data_file)),
        config,
    };

    match cli.command {
        Some(Commands::Serve { bind, port }) => handle_serve(&mut ctx, bind, port),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Show { id, json }) => handle_show(&ctx, id, json),
        Some(Commands::Search {
            first_name,
            last_name,
            email,
            role,
            json,
        }) => {
            let filter = SearchFilter {
                first_name,
                last_name,
                email,
                role,
            };
            handle_search(&ctx, &filter, json)
        }
        Some(Commands::Add(add)) => handle_add(&ctx, add),
        Some(Commands::Update { id, fields }) => handle_update(&ctx, id, fields),
        Some(Commands::Delete { id }) => handle_delete(&ctx, id),
        None => handle_list(&ctx, false),
    }
}

/// Config file from `--config`, else the user config dir; `--file` wins over
/// the configured records file.
fn load_config(cli: &Cli) -> Result<RosterConfig> {
    let config_path: Option<PathBuf> = cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    });

    let mut config = match config_path {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::default(),
    };
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    Ok(config)
}

fn handle_serve(ctx: &mut AppContext, bind: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(bind) = bind {
        ctx.config.bind = bind;
    }
    if let Some(port) = port {
        ctx.config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(roster::http::serve(&ctx.config))
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_employees()?;
    if json {
        return print_json(&result.listed);
    }
    print_employees(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: i64, json: bool) -> Result<()> {
    let result = ctx.api.get_employee(id)?;
    for employee in &result.listed {
        if json {
            print_json(employee)?;
        } else {
            print_employee(employee);
        }
    }
    Ok(())
}

fn handle_search(ctx: &AppContext, filter: &SearchFilter, json: bool) -> Result<()> {
    let result = ctx.api.search_employees(filter)?;
    if json {
        return print_json(&result.listed);
    }
    print_employees(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &AppContext, add: AddArgs) -> Result<()> {
    let employee = add.into_employee();
    employee.validate_required()?;

    let result = ctx.api.create_employee(employee)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &AppContext, id: i64, fields: UpdateArgs) -> Result<()> {
    let result = ctx.api.update_employee(id, &fields.into_updates())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: i64) -> Result<()> {
    let result = ctx.api.delete_employee(id)?;
    print_messages(&result.messages);
    Ok(())
}

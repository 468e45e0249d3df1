mod cli;
mod employees;
mod error;
mod fmt;
mod models;
mod payroll;
mod reports;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands, EmployeesCommands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    let result = match cli.command {
        Commands::Init => cli::init::run(data_dir),
        Commands::Load { path } => cli::load::run(&path),
        Commands::Status => cli::status::run(&settings::data_files(data_dir)),
        Commands::Backup { output } => {
            cli::backup::run(&settings::data_files(data_dir), output.as_deref())
        }
        Commands::Employees { command } => {
            let files = settings::data_files(data_dir);
            match command {
                EmployeesCommands::Add { id, name, salary } => {
                    cli::employees::add(&files, &id, &name, &salary)
                }
                EmployeesCommands::List => cli::employees::list(&files),
                EmployeesCommands::Show { id } => cli::employees::show(&files, &id),
                EmployeesCommands::Remove { id } => cli::employees::remove(&files, &id),
            }
        }
        Commands::Process {
            id,
            all,
            month,
            year,
        } => {
            let files = settings::data_files(data_dir);
            match id {
                Some(id) if !all => {
                    cli::process::run(&files, &id, month.as_deref(), year.as_deref())
                }
                _ => cli::process::run_all(&files, month.as_deref(), year.as_deref()),
            }
        }
        Commands::History { id } => cli::history::run(&settings::data_files(data_dir), &id),
        Commands::Report { month, year } => {
            cli::report::monthly(&settings::data_files(data_dir), &month, &year)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

pub mod backup;
pub mod employees;
pub mod history;
pub mod init;
pub mod load;
pub mod process;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "payroll", version, about = "Employee register and monthly payroll, kept in plain text files.")]
pub struct Cli {
    /// Data directory for this invocation (overrides settings)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and save it to settings.
    Init,
    /// Switch to an existing payroll data directory.
    Load {
        /// Path to a directory containing employees.txt
        path: String,
    },
    /// Show the data directory and record counts.
    Status,
    /// Copy the employee master and payroll ledger to a backup directory.
    Backup {
        /// Output directory (default: <data_dir>/backups/YYYYMMDD-HHMMSS)
        #[arg(long)]
        output: Option<String>,
    },
    /// Manage employees.
    Employees {
        #[command(subcommand)]
        command: EmployeesCommands,
    },
    /// Compute salary for a month and append it to the payroll ledger.
    Process {
        /// Employee ID
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<String>,
        /// Process every employee on file
        #[arg(long)]
        all: bool,
        /// Month 1-12 (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Year (default: current year)
        #[arg(long)]
        year: Option<String>,
    },
    /// Show the payroll history of one employee.
    History {
        /// Employee ID
        id: String,
    },
    /// Monthly payroll report with totals.
    Report {
        /// Month 1-12
        #[arg(long)]
        month: String,
        /// Year, e.g. 2025
        #[arg(long)]
        year: String,
    },
}

#[derive(Subcommand)]
pub enum EmployeesCommands {
    /// Add a new employee.
    #[command(allow_negative_numbers = true)]
    Add {
        /// Unique employee ID, e.g. 'E001'
        id: String,
        /// Full name
        name: String,
        /// Monthly basic salary
        #[arg(allow_hyphen_values = true)]
        salary: String,
    },
    /// List all employees.
    List,
    /// Look up one employee by ID.
    Show {
        /// Employee ID
        id: String,
    },
    /// Remove an employee. Payroll history is kept.
    Remove {
        /// Employee ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_process_requires_id_or_all() {
        assert!(Cli::try_parse_from(["payroll", "process"]).is_err());
        assert!(Cli::try_parse_from(["payroll", "process", "E1", "--all"]).is_err());
        assert!(Cli::try_parse_from(["payroll", "process", "--all", "--month", "3"]).is_ok());
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["payroll", "employees", "list", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/x"));
    }
}

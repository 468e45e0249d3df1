use std::path::PathBuf;

use crate::error::{PayrollError, Result};
use crate::settings::{load_settings, save_settings, shellexpand_path, DataFiles};

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));
    let files = DataFiles::in_dir(&resolved);

    if !files.employees.exists() && !files.payroll.exists() {
        return Err(PayrollError::Settings(format!(
            "No payroll data found at {}\nRun `payroll init --data-dir {}` to create one.",
            resolved.display(),
            resolved.display()
        )));
    }

    let mut settings = load_settings();
    settings.data_dir = resolved.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Switched to {}", resolved.display());
    Ok(())
}

use std::path::PathBuf;

use crate::error::{PayrollError, Result};
use crate::fmt::format_bytes;
use crate::settings::{DataFiles, EMPLOYEES_FILE, PAYROLL_FILE};

pub fn run(files: &DataFiles, output: Option<&str>) -> Result<()> {
    let dest_dir = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            files.dir.join("backups").join(stamp.to_string())
        }
    };

    let sources = [
        (&files.employees, EMPLOYEES_FILE),
        (&files.payroll, PAYROLL_FILE),
    ];
    if sources.iter().all(|(src, _)| !src.exists()) {
        return Err(PayrollError::Other(format!(
            "Nothing to back up in {}",
            files.dir.display()
        )));
    }

    std::fs::create_dir_all(&dest_dir)?;
    let mut copied = 0u64;
    for (src, name) in sources {
        if src.exists() {
            copied += std::fs::copy(src, dest_dir.join(name))?;
        }
    }

    println!("Backup saved to {}", dest_dir.display());
    println!("Size: {}", format_bytes(copied));
    Ok(())
}

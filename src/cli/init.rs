use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_file_exists, shellexpand_path, DataFiles};

pub fn run(data_dir: Option<&str>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(dir);
    } else if !settings_file_exists() {
        // First run: prompt for data dir
        println!("Data directory [{}]: ", settings.data_dir);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        if !chosen.is_empty() {
            settings.data_dir = shellexpand_path(chosen);
        }
    }

    let files = DataFiles::in_dir(&settings.data_dir);
    std::fs::create_dir_all(&files.dir)?;
    save_settings(&settings)?;

    log::info!("data directory set to {}", files.dir.display());
    println!("Initialized payroll at {}", files.dir.display());
    Ok(())
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Copies every input into `<public_dir>/logo-backup` under one shared run
/// timestamp and returns the backup directory.
///
/// Backups are byte-identical copies of the originals, made before any logo
/// is mutated; they are never read back by this tool.
pub fn create_backups(public_dir: &Path, inputs: &[&Path]) -> io::Result<PathBuf> {
    let backup_dir = public_dir.join("logo-backup");
    fs::create_dir_all(&backup_dir)?;

    let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    for input in inputs {
        let dest = backup_dir.join(backup_name(input, &timestamp));
        fs::copy(input, &dest)?;
        log::debug!("backed up {} -> {}", input.display(), dest.display());
    }

    Ok(backup_dir)
}

fn backup_name(input: &Path, timestamp: &str) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}-backup-{}.png", stem, timestamp)
}

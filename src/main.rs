mod backup;
mod bounds;
mod trimmer;

use std::path::{Path, PathBuf};
use std::process;

// Fixed assets this tool exists for; run from backend/ so the relative
// path lands in the frontend's public directory.
const PUBLIC_DIR: &str = "../frontend/public";
const LOGO_LIGHT: &str = "aifinity-logo.png";
const LOGO_DARK: &str = "aifinity-logo-dark.png";

fn main() {
    env_logger::init(); // Initialize logger

    if let Err(e) = run() {
        eprintln!("\n❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎨 Auto-cropping AiFinity logos...\n");

    let public_dir = PathBuf::from(PUBLIC_DIR);
    let logo_light = public_dir.join(LOGO_LIGHT);
    let logo_dark = public_dir.join(LOGO_DARK);

    // A missing input aborts the run before any backup or mutation happens
    if let Some(missing) = first_missing(&[logo_light.as_path(), logo_dark.as_path()]) {
        println!("❌ Logo not found: {}", missing.display());
        return Ok(());
    }

    let backup_dir =
        backup::create_backups(&public_dir, &[logo_light.as_path(), logo_dark.as_path()])?;
    println!("✅ Backups created\n");

    // Overwrite in place; one failed logo never stops the other
    let light_ok = trimmer::crop_logo(&logo_light, &logo_light);
    let dark_ok = trimmer::crop_logo(&logo_dark, &logo_dark);

    if light_ok && dark_ok {
        println!("\n✅ All logos cropped successfully!");
        println!("\n💡 Original files backed up in: {}", backup_dir.display());
    } else {
        println!("\n⚠ Some logos failed to crop");
    }

    Ok(())
}

fn first_missing<'a>(paths: &[&'a Path]) -> Option<&'a Path> {
    paths.iter().find(|path| !path.exists()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_missing_reports_first_absent_path() {
        let present = std::env::temp_dir();
        let absent = present.join("crop-logos-no-such-file.png");
        let present = present.as_path();
        let absent = absent.as_path();

        assert_eq!(first_missing(&[present, present]), None);
        assert_eq!(first_missing(&[present, absent]), Some(absent));
        assert_eq!(first_missing(&[absent, present]), Some(absent));
    }
}

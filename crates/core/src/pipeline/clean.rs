use std::{
    fs::{remove_dir_all, remove_file},
    path::Path,
};

use crate::error::Result;

/// Remove the resources cache and the generated header.
pub fn clean(resources_dir: &Path, output: &Path) -> Result<()> {
    let mut removed = 0;

    if resources_dir.exists() {
        remove_dir_all(resources_dir)?;
        println!("Removed {}", resources_dir.display());
        removed += 1;
    } else {
        println!("Skipped {} (not found)", resources_dir.display());
    }

    if output.exists() {
        remove_file(output)?;
        println!("Removed {}", output.display());
        removed += 1;
    } else {
        println!("Skipped {} (not found)", output.display());
    }

    println!("Cleaned {removed} entries");
    Ok(())
}

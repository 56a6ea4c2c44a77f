use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Ensure a directory exists, creating parents as needed. Safe to call on
/// every run.
pub fn ensure_directory(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        println!("Created directory: {}", path.display());
    }
    Ok(())
}

/// Batch check which icon file names already exist to avoid re-downloading
pub fn batch_check_existing(dir: &Path, file_names: &[String]) -> HashMap<String, bool> {
    file_names
        .par_iter()
        .map(|name| (name.clone(), dir.join(name).exists()))
        .collect()
}

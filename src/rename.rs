// Renamer: copy downloaded icons under transformed names. Icon file
// names from the CDN look like `grinning-face_with-big-eyes_1f603.png`
// or, with a skin-tone variant, `waving-hand_light-skin-tone_1f44b_1f3fb.png`.

use crate::utils::files::ensure_directory;
use clap::ValueEnum;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenameMode {
    /// Keep the descriptive emoji name
    Name,
    /// Keep the coded unicode identifier
    Unicode,
}

/// Copy every file in `input_dir` into `output_dir` under its transformed
/// name. Existing destination files are overwritten; the input directory
/// is never touched. Returns the number of files copied.
pub fn rename_icons(input_dir: &Path, output_dir: &Path, mode: RenameMode) -> io::Result<usize> {
    ensure_directory(output_dir)?;

    let mut copied = 0;
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let target = transform_name(&file_name, mode);
        fs::copy(entry.path(), output_dir.join(target))?;
        copied += 1;
    }

    Ok(copied)
}

/// Transform one file name according to the mode.
///
/// The stem splits on `_`. A four-part stem is a skin-tone variant:
/// `Unicode` keeps the second-to-last part, `Name` joins the first two.
/// Any other shape keeps the last (`Unicode`) or first (`Name`) part.
pub fn transform_name(file_name: &str, mode: RenameMode) -> String {
    let (stem, ext) = split_extension(file_name);
    let parts: Vec<&str> = stem.split('_').collect();

    let selected = if parts.len() == 4 {
        match mode {
            RenameMode::Unicode => parts[2].to_string(),
            RenameMode::Name => format!("{}{}", parts[0], parts[1]),
        }
    } else {
        match mode {
            RenameMode::Unicode => parts.last().copied().unwrap_or(stem).to_string(),
            RenameMode::Name => parts.first().copied().unwrap_or(stem).to_string(),
        }
    };

    format!("{}{}", selected, ext)
}

/// Split into stem and extension, extension keeping its dot. A leading
/// dot is part of the stem, not an extension.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => (&file_name[..idx], &file_name[idx..]),
        _ => (file_name, ""),
    }
}

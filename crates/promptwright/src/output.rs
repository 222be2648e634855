use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

/// Write a compiled prompt to `path`, creating parent directories
pub fn write_prompt(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, text)
        .with_context(|| format!("Failed to write prompt to {}", path.display()))?;

    eprintln!(
        "{} Saved to {}",
        "✓".bright_green(),
        path.display().to_string().bright_cyan()
    );
    Ok(())
}

/// Output path for the `round`-th prompt of a run: `prompt.md`, then
/// `prompt-2.md`, `prompt-3.md` and so on
pub fn numbered_path(path: &Path, round: usize) -> PathBuf {
    if round <= 1 {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, round, ext.to_string_lossy()),
        None => format!("{}-{}", stem, round),
    };
    path.with_file_name(name)
}

/// Text progress bar like `[██████░░░░░░]`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

//! Interactive initialization for promptwright.
//!
//! Sets up the global config file with user-selected defaults.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Select};
use std::fs;

use promptwright_core::{categories, CategoryId};

use crate::config::{GlobalConfig, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE};

/// Console log formats offered during setup
const FORMATS: &[&str] = &["pretty", "compact", "json"];

pub fn handle_init() -> Result<()> {
    eprintln!("{}", "Setting up promptwright...".bold());
    eprintln!();

    // Step 1: default category, or always show the menu
    let mut items = vec!["Always ask".to_string()];
    items.extend(
        categories()
            .iter()
            .map(|c| format!("{}  {}", c.icon, c.display_name)),
    );
    let picked = Select::new()
        .with_prompt("Start with a category by default?")
        .items(&items)
        .default(0)
        .interact()?;
    let category = picked.checked_sub(1).map(|i| categories()[i].id);

    // Step 2: console log format
    let format = Select::new()
        .with_prompt("Console log format")
        .items(FORMATS)
        .default(0)
        .interact()?;

    // Step 3: $EDITOR for long answers
    let use_editor = Confirm::new()
        .with_prompt("Open $EDITOR for multi-line answers?")
        .default(false)
        .interact()?;

    // Step 4: write global config
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join(GLOBAL_CONFIG_DIR);
    let config_path = config_dir.join(GLOBAL_CONFIG_FILE);

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    if config_path.exists() {
        eprintln!(
            "{} Config already exists at {}",
            "⚠".bright_yellow(),
            config_path.display()
        );

        let overwrite = Select::new()
            .with_prompt("Overwrite existing config?")
            .items(&["No, keep existing", "Yes, replace it"])
            .default(0)
            .interact()?;

        if overwrite == 0 {
            eprintln!();
            eprintln!("Keeping existing config. Edit it manually if needed:");
            eprintln!("  {}", config_path.display().to_string().dimmed());
            return Ok(());
        }
    }

    let content = render_config(category, FORMATS[format], use_editor);
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    eprintln!();
    eprintln!(
        "{} Config saved to {}",
        "✓".bright_green(),
        config_path.display()
    );

    print_getting_started();

    Ok(())
}

/// Contents of the global config file
fn render_config(category: Option<CategoryId>, log_format: &str, use_editor: bool) -> String {
    let category_line = match category {
        Some(c) => format!("category = \"{}\"", c),
        None => "# category = \"code-generation\"  # Skip the category menu".to_string(),
    };

    format!(
        r#"[defaults]
{}
log_format = "{}"
use_editor = {}
# log_level = "warn"
# log_dir = "/path/to/logs"
# output = "prompt.md"
"#,
        category_line, log_format, use_editor
    )
}

/// Print the getting started guide
pub fn print_getting_started() {
    eprintln!();
    eprintln!("{}", "Getting started:".bold());
    eprintln!(
        "  {} Run: {}",
        "1.".dimmed(),
        "promptwright".bright_cyan()
    );
    eprintln!(
        "  {} Browse the categories: {}",
        "2.".dimmed(),
        "promptwright list --verbose".bright_cyan()
    );
    eprintln!(
        "  {} Compile from a file: {}",
        "3.".dimmed(),
        "promptwright compile --category translation --answers answers.toml".bright_cyan()
    );
    eprintln!(
        "  {} Per-project settings go in {}",
        "4.".dimmed(),
        "promptwright.toml".bright_cyan()
    );
}

/// Check if this appears to be first run (no global config)
pub fn is_first_run() -> bool {
    !GlobalConfig::exists()
}

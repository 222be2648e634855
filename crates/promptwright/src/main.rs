mod batch;
mod config;
mod init;
mod interactive;
mod list;
mod output;
mod terminal;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use promptwright_core::CategoryId;
use promptwright_logging::{init_tracing, LogFormat, Logger};

use config::{GlobalConfig, Overrides, ProjectConfig, Settings};
use interactive::RunOptions;
use terminal::Terminal;

/// JSON-lines event log written inside the log directory
const EVENT_LOG_FILE: &str = "events.jsonl";

#[derive(Parser, Debug)]
#[command(
    name = "promptwright",
    about = "Build structured AI prompts by answering a short questionnaire",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Working directory (default: current directory)
    #[arg(short = 'd', long, global = true)]
    working_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormatChoice>,

    /// Tracing filter, e.g. "info" or "promptwright_core=debug"
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive wizard (default)
    Run(RunArgs),

    /// List prompt categories
    List {
        /// Also list each category's questions
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compile a prompt from an answers file without asking
    Compile(CompileArgs),

    /// Set up the global config
    Init,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Start with this category instead of the menu
    #[arg(short, long)]
    category: Option<CategoryId>,

    /// Also write the prompt to this file (later rounds: name-2.md, ...)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Open $EDITOR for multi-line answers
    #[arg(long)]
    editor: bool,
}

#[derive(Args, Debug)]
struct CompileArgs {
    /// Category id, e.g. code-generation (see `promptwright list`)
    #[arg(short, long)]
    category: CategoryId,

    /// Answers file: JSON (.json) or TOML mapping question ids to values
    #[arg(short, long)]
    answers: PathBuf,

    /// Write the prompt to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print category, answers and prompt as JSON
    #[arg(long)]
    json_output: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init does its own prompting and needs no settings
    if let Some(Commands::Init) = cli.command {
        return init::handle_init();
    }

    let working_dir = match cli.working_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let command = cli.command.unwrap_or(Commands::Run(RunArgs::default()));

    let (run_category, run_output, run_editor) = match &command {
        Commands::Run(args) => (
            args.category,
            args.output.clone(),
            args.editor.then_some(true),
        ),
        _ => (None, None, None),
    };

    let project = ProjectConfig::load(&working_dir)?;
    let global = GlobalConfig::load()?;
    let settings = Settings::resolve(
        Overrides {
            category: run_category,
            output: run_output,
            log_format: cli.log_format.map(Into::into),
            log_level: cli.log_level.clone(),
            use_editor: run_editor,
        },
        project.as_ref(),
        global.as_ref(),
        &working_dir,
    )?;

    if let Some(ref dir) = settings.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let guard = Arc::new(Mutex::new(init_tracing(
        &settings.log_level,
        settings.log_format,
        settings.log_dir.as_deref(),
    )));
    debug!(?settings, "settings resolved");

    let logger = match settings.log_dir {
        Some(ref dir) => {
            let path = dir.join(EVENT_LOG_FILE);
            Logger::with_file(settings.log_format, &path)
                .with_context(|| format!("Failed to open event log {}", path.display()))?
        }
        None => Logger::new(settings.log_format),
    };

    match command {
        Commands::Run(_) => {
            // Prompts hide the cursor; put it back if the user bails out
            let handler_guard = Arc::clone(&guard);
            ctrlc::set_handler(move || {
                eprint!("\x1b[?25h");
                eprintln!("\nInterrupted.");
                flush_logs(&handler_guard);
                std::process::exit(130);
            })
            .context("Failed to set Ctrl+C handler")?;

            if init::is_first_run() {
                eprintln!(
                    "{} Run {} to save your defaults.",
                    "Tip:".dimmed(),
                    "promptwright init".bright_cyan()
                );
            }

            let mut frontend = Terminal::new(settings.use_editor);
            let options = RunOptions {
                category: settings.category,
                output: settings.output,
            };
            interactive::run(&mut frontend, &logger, options)?;
        }
        Commands::List { verbose } => list::handle_list(verbose),
        Commands::Compile(args) => {
            let output = args.output.map(|p| config::absolutize(&working_dir, p));
            let answers = config::absolutize(&working_dir, args.answers);
            batch::handle_compile(
                args.category,
                &answers,
                output.as_deref(),
                args.json_output,
                &logger,
            )?;
        }
        Commands::Init => init::handle_init()?,
    }

    Ok(())
}

/// Drop the tracing writer guard so buffered file lines are written out
fn flush_logs(guard: &Mutex<Option<WorkerGuard>>) {
    if let Ok(mut slot) = guard.lock() {
        drop(slot.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "promptwright",
            "run",
            "--category",
            "translation",
            "--editor",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.category, Some(CategoryId::Translation));
                assert!(args.editor);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["promptwright", "--log-level", "debug"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_compile_requires_known_category() {
        assert!(Cli::try_parse_from([
            "promptwright",
            "compile",
            "--category",
            "haiku",
            "--answers",
            "a.json",
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "promptwright",
            "compile",
            "-c",
            "chatbot",
            "-a",
            "a.toml",
            "--json-output",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Compile(args)) => {
                assert_eq!(args.category, CategoryId::Chatbot);
                assert!(args.json_output);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_flush_logs_writes_buffered_lines() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let appender = tracing_appender::rolling::never(dir.path(), "flush.log");
        let (mut writer, guard) = tracing_appender::non_blocking(appender);
        writeln!(writer, "interrupted mid-question").unwrap();

        let slot = Mutex::new(Some(guard));
        flush_logs(&slot);

        assert!(slot.lock().unwrap().is_none());
        let content = std::fs::read_to_string(dir.path().join("flush.log")).unwrap();
        assert!(content.contains("interrupted mid-question"));
    }
}

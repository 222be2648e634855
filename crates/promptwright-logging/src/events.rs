use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Structured log events for a wizard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    SessionStarted {
        session_id: String,
    },
    CategorySelected {
        category: String,
        display_name: String,
        question_count: usize,
    },
    AnswerRecorded {
        question_id: String,
        index: usize,
        value_preview: String,
    },
    /// Optional question left without an answer
    QuestionSkipped {
        question_id: String,
        index: usize,
    },
    Advanced {
        from: usize,
        to: usize,
    },
    Retreated {
        from: usize,
        to: usize,
    },
    /// Tried to move past a required question with no answer
    AdvanceBlocked {
        question_id: String,
    },
    PromptCompiled {
        category: String,
        answered: usize,
        chars: usize,
    },
    SessionRestarted,
}

impl WizardEvent {
    /// Add a timestamp to serialize with the event
    fn with_timestamp(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        value
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors and visual structure
    #[default]
    Pretty,
    /// JSON lines format for machine consumption
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Logger for wizard events - handles both console output and file logging
pub struct Logger {
    format: LogFormat,
    file_writer: Option<Mutex<File>>,
}

impl Logger {
    pub fn new(format: LogFormat) -> Self {
        Self {
            format,
            file_writer: None,
        }
    }

    /// Create a logger with file output in addition to console
    pub fn with_file(format: LogFormat, log_path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        Ok(Self {
            format,
            file_writer: Some(Mutex::new(file)),
        })
    }

    pub fn log(&self, event: &WizardEvent) {
        // File output is always JSON
        if let Some(ref writer) = self.file_writer {
            if let Ok(mut file) = writer.lock() {
                let json = event.with_timestamp();
                let _ = writeln!(file, "{}", json);
            }
        }

        let line = match self.format {
            LogFormat::Json => serde_json::to_string(event).ok(),
            LogFormat::Pretty => Self::render_pretty(event),
            LogFormat::Compact => Self::render_compact(event),
        };

        if let Some(line) = line {
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
    }

    /// Pretty output only covers milestones; per-question chatter is already
    /// visible in the interactive prompts.
    fn render_pretty(event: &WizardEvent) -> Option<String> {
        match event {
            WizardEvent::CategorySelected {
                display_name,
                question_count,
                ..
            } => {
                let title = format!(" {} ", display_name);
                let count = format!(
                    "{} {}",
                    question_count,
                    if *question_count == 1 {
                        "pergunta"
                    } else {
                        "perguntas"
                    }
                );
                let width = 44usize;
                let inner = title.chars().count() + count.chars().count() + 1;
                let padding = width.saturating_sub(inner);
                Some(format!(
                    "{}{}{}{}{}",
                    "╭─".bright_blue(),
                    title.bold().bright_white(),
                    "─".repeat(padding).bright_blue(),
                    count.dimmed(),
                    " ─╮".bright_blue()
                ))
            }
            WizardEvent::PromptCompiled {
                answered, chars, ..
            } => Some(format!(
                "{} Prompt gerado ({} respostas, {} caracteres)",
                "✓".bright_green(),
                answered,
                chars
            )),
            WizardEvent::SessionStarted { .. }
            | WizardEvent::AnswerRecorded { .. }
            | WizardEvent::QuestionSkipped { .. }
            | WizardEvent::Advanced { .. }
            | WizardEvent::Retreated { .. }
            | WizardEvent::AdvanceBlocked { .. }
            | WizardEvent::SessionRestarted => None,
        }
    }

    fn render_compact(event: &WizardEvent) -> Option<String> {
        let timestamp = chrono::Utc::now().format("%H:%M:%S");
        let msg = match event {
            WizardEvent::SessionStarted { session_id } => {
                format!("[{}] session:start {}", timestamp, session_id)
            }
            WizardEvent::CategorySelected {
                category,
                question_count,
                ..
            } => format!(
                "[{}] category:{} q={}",
                timestamp, category, question_count
            ),
            WizardEvent::AnswerRecorded {
                question_id, index, ..
            } => format!("[{}] answer:{}:{}", timestamp, index + 1, question_id),
            WizardEvent::QuestionSkipped { question_id, index } => {
                format!("[{}] skip:{}:{}", timestamp, index + 1, question_id)
            }
            WizardEvent::Advanced { from, to } => {
                format!("[{}] next:{}->{}", timestamp, from + 1, to + 1)
            }
            WizardEvent::Retreated { from, to } => {
                format!("[{}] back:{}->{}", timestamp, from + 1, to + 1)
            }
            WizardEvent::AdvanceBlocked { question_id } => {
                format!("[{}] blocked:{}", timestamp, question_id)
            }
            WizardEvent::PromptCompiled {
                category,
                answered,
                chars,
            } => format!(
                "[{}] compiled:{} answers={} chars={}",
                timestamp, category, answered, chars
            ),
            WizardEvent::SessionRestarted => format!("[{}] session:restart", timestamp),
        };
        Some(msg)
    }
}

/// Shorten an answer for logging, on a char boundary
pub fn preview(value: &str, max_chars: usize) -> String {
    let flat = value.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = WizardEvent::AdvanceBlocked {
            question_id: "language".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "advance_blocked");
        assert_eq!(json["question_id"], "language");

        let unit = serde_json::to_value(WizardEvent::SessionRestarted).unwrap();
        assert_eq!(unit["event"], "session_restarted");
    }

    #[test]
    fn test_file_log_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");

        let logger = Logger::with_file(LogFormat::Json, &path).unwrap();
        logger.log(&WizardEvent::SessionStarted {
            session_id: "abc".to_string(),
        });
        logger.log(&WizardEvent::Advanced { from: 0, to: 1 });

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "session_started");
        assert!(lines[1]["timestamp"].is_string());
    }

    #[test]
    fn test_pretty_skips_per_question_events() {
        assert!(Logger::render_pretty(&WizardEvent::Advanced { from: 0, to: 1 }).is_none());
        let compiled = Logger::render_pretty(&WizardEvent::PromptCompiled {
            category: "custom".to_string(),
            answered: 3,
            chars: 120,
        })
        .unwrap();
        assert!(compiled.contains("3 respostas"));
    }

    #[test]
    fn test_compact_uses_one_based_positions() {
        let line = Logger::render_compact(&WizardEvent::Retreated { from: 2, to: 1 }).unwrap();
        assert!(line.ends_with("back:3->2"));
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("linha um\nlinha dois", 40), "linha um linha dois");
        assert_eq!(preview("ááááááááá", 6), "ááá...");
    }
}

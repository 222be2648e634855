//! Interactive wizard loop.
//!
//! Drives a [`WizardSession`] from the category menu to a compiled prompt.
//! All terminal I/O goes through the [`Frontend`] trait so the loop can be
//! exercised with scripted answers.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use promptwright_core::{
    Advance, AnswerValue, CategoryId, QuestionDefinition, WizardError, WizardSession,
};
use promptwright_logging::{preview, Logger, WizardEvent};

use crate::output;

/// What the frontend needs to render a question
#[derive(Debug, Clone)]
pub struct QuestionView<'a> {
    pub question: &'static QuestionDefinition,
    /// Zero-based position in the questionnaire
    pub index: usize,
    pub total: usize,
    pub progress: f64,
    /// Answer given earlier, shown as the starting value
    pub current: Option<&'a AnswerValue>,
    pub can_go_back: bool,
    pub is_last: bool,
}

/// A user's reply to a question
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Replace the stored answer and move on
    Answer(AnswerValue),
    /// Check or uncheck one option of a multi-select question, then ask again
    Toggle(String),
    /// Move on with whatever is stored
    Next,
    Back,
}

/// Terminal side of the wizard
pub trait Frontend {
    fn choose_category(&mut self) -> Result<CategoryId>;

    fn ask(&mut self, view: &QuestionView<'_>) -> Result<Reply>;

    /// Tell the user a required question still needs an answer
    fn warn_required(&mut self, question: &QuestionDefinition);

    fn show_result(&mut self, text: &str);

    /// Whether to go back to the menu for another prompt
    fn another_round(&mut self) -> Result<bool>;
}

/// Options for an interactive run
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Category for the first round, skipping the menu
    pub category: Option<CategoryId>,
    /// Where the first compiled prompt is written; later rounds get a
    /// numbered sibling such as `prompt-2.md`
    pub output: Option<PathBuf>,
}

/// Run the wizard until the user stops. Returns the prompts compiled.
pub fn run<F: Frontend>(
    frontend: &mut F,
    logger: &Logger,
    options: RunOptions,
) -> Result<Vec<String>> {
    let mut session = WizardSession::new();
    let mut preset = options.category;
    let mut compiled = Vec::new();

    logger.log(&WizardEvent::SessionStarted {
        session_id: session.id().to_string(),
    });

    loop {
        let category = match preset.take() {
            Some(c) => c,
            None => frontend.choose_category()?,
        };

        session.select_category(category);
        let entry = category.category();
        logger.log(&WizardEvent::CategorySelected {
            category: category.to_string(),
            display_name: entry.display_name.to_string(),
            question_count: entry.questions.len(),
        });

        answer_all(frontend, logger, &mut session)?;

        let text = session
            .compiled_text()
            .map(str::to_string)
            .ok_or(WizardError::NotAnswering)?;

        frontend.show_result(&text);
        if let Some(ref base) = options.output {
            let path = output::numbered_path(base, compiled.len() + 1);
            output::write_prompt(&path, &text)?;
            info!(path = %path.display(), "prompt written");
        }
        compiled.push(text);

        if !frontend.another_round()? {
            break;
        }

        session.restart();
        logger.log(&WizardEvent::SessionRestarted);
    }

    Ok(compiled)
}

/// Ask questions until the session reaches its result
fn answer_all<F: Frontend>(
    frontend: &mut F,
    logger: &Logger,
    session: &mut WizardSession,
) -> Result<()> {
    while let Some(question) = session.current_question() {
        let index = session.current_index();
        let total = session.category().map_or(0, |c| c.questions.len());

        let reply = {
            let view = QuestionView {
                question,
                index,
                total,
                progress: session.progress_fraction(),
                current: session.current_answer(),
                can_go_back: index > 0,
                is_last: session.is_last_question(),
            };
            frontend.ask(&view)?
        };

        match reply {
            Reply::Back => {
                if session.retreat() {
                    logger.log(&WizardEvent::Retreated {
                        from: index,
                        to: session.current_index(),
                    });
                }
                continue;
            }
            Reply::Toggle(option) => {
                session.toggle_choice(question.id, &option)?;
                continue;
            }
            Reply::Answer(value) => session.record_answer(question.id, value)?,
            Reply::Next => {}
        }

        match session.current_answer().filter(|v| !v.is_blank()) {
            Some(value) => logger.log(&WizardEvent::AnswerRecorded {
                question_id: question.id.to_string(),
                index,
                value_preview: preview(&value.render(), 60),
            }),
            None => logger.log(&WizardEvent::QuestionSkipped {
                question_id: question.id.to_string(),
                index,
            }),
        }

        if !session.can_advance() {
            logger.log(&WizardEvent::AdvanceBlocked {
                question_id: question.id.to_string(),
            });
            frontend.warn_required(question);
            continue;
        }

        match session.advance()? {
            Advance::Moved(to) => {
                logger.log(&WizardEvent::Advanced { from: index, to });
            }
            Advance::Completed => {
                let category = session
                    .category()
                    .map(|c| c.id.to_string())
                    .unwrap_or_default();
                logger.log(&WizardEvent::PromptCompiled {
                    category,
                    answered: session
                        .answers()
                        .iter()
                        .filter(|(_, v)| !v.is_blank())
                        .count(),
                    chars: session.compiled_text().map_or(0, |t| t.chars().count()),
                });
            }
        }
    }

    Ok(())
}

//! Wizard state machine.
//!
//! A session moves from picking a category, through answering that
//! category's questions one at a time, to a compiled prompt. Restarting
//! throws everything away and goes back to the category menu.

use tracing::debug;
use uuid::Uuid;

use crate::answers::{AnswerStore, AnswerValue};
use crate::catalog::{Category, CategoryId, QuestionDefinition, QuestionKind};
use crate::compiler;
use crate::error::WizardError;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardState {
    #[default]
    SelectingCategory,
    Answering,
    Result,
}

/// What a successful `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index
    Moved(usize),
    /// The last question was answered and the prompt compiled
    Completed,
}

/// One user's pass through the wizard
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: Uuid,
    state: WizardState,
    category: Option<&'static Category>,
    current_index: usize,
    answers: AnswerStore,
    compiled_text: Option<String>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: WizardState::SelectingCategory,
            category: None,
            current_index: 0,
            answers: AnswerStore::new(),
            compiled_text: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn category(&self) -> Option<&'static Category> {
        self.category
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn compiled_text(&self) -> Option<&str> {
        self.compiled_text.as_deref()
    }

    /// The question being asked; `None` unless answering
    pub fn current_question(&self) -> Option<&'static QuestionDefinition> {
        if self.state != WizardState::Answering {
            return None;
        }
        self.category
            .and_then(|c| c.questions.get(self.current_index))
    }

    /// The stored answer for the current question
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|q| self.answers.get(q.id))
    }

    pub fn is_last_question(&self) -> bool {
        match (self.state, self.category) {
            (WizardState::Answering, Some(c)) => self.current_index + 1 == c.questions.len(),
            _ => false,
        }
    }

    /// Share of the questionnaire reached, counting the current question
    pub fn progress_fraction(&self) -> f64 {
        match (self.state, self.category) {
            (WizardState::Answering, Some(c)) => {
                (self.current_index + 1) as f64 / c.questions.len() as f64
            }
            (WizardState::Result, _) => 1.0,
            _ => 0.0,
        }
    }

    /// Start answering `category`. Ignored unless the session is on the
    /// category menu.
    pub fn select_category(&mut self, category: CategoryId) {
        if self.state != WizardState::SelectingCategory {
            debug!(session = %self.id, state = ?self.state, "category selection ignored");
            return;
        }

        let entry = category.category();
        self.category = Some(entry);
        self.current_index = 0;
        self.answers.clear();
        self.compiled_text = None;
        self.state = WizardState::Answering;

        debug!(
            session = %self.id,
            category = %category,
            questions = entry.questions.len(),
            "category selected"
        );
    }

    /// Store an answer without moving.
    ///
    /// Only the shape is checked: a list for a multi-select question, text for
    /// everything else. Whether the text matches one of the options is up to
    /// the caller.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<(), WizardError> {
        let question = self.question(question_id)?;

        let fits = match (&value, question.kind) {
            (AnswerValue::Choices(_), QuestionKind::MultiSelect) => true,
            (AnswerValue::Text(_), kind) => !kind.is_multi_choice(),
            (AnswerValue::Choices(_), _) => false,
        };
        if !fits {
            return Err(WizardError::ShapeMismatch {
                question_id: question_id.to_string(),
                kind: question.kind,
            });
        }

        debug!(session = %self.id, question = question_id, "answer recorded");
        self.answers.record(question_id, value);
        Ok(())
    }

    /// Flip one option of a multi-select question, keeping pick order
    pub fn toggle_choice(&mut self, question_id: &str, option: &str) -> Result<(), WizardError> {
        let question = self.question(question_id)?;
        if !question.kind.is_multi_choice() {
            return Err(WizardError::ShapeMismatch {
                question_id: question_id.to_string(),
                kind: question.kind,
            });
        }

        self.answers.toggle_choice(question_id, option);
        Ok(())
    }

    /// Whether the current question lets the user move on
    pub fn can_advance(&self) -> bool {
        match self.current_question() {
            Some(q) if q.required => self
                .answers
                .get(q.id)
                .is_some_and(|v| !v.is_blank()),
            Some(_) => true,
            None => false,
        }
    }

    /// Move to the next question, compiling the prompt after the last one
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        let (Some(category), Some(question)) = (self.category, self.current_question()) else {
            return Err(WizardError::NotAnswering);
        };

        if !self.can_advance() {
            return Err(WizardError::RequiredUnanswered {
                question_id: question.id.to_string(),
            });
        }

        if self.is_last_question() {
            let text = compiler::compile(category.id, &self.answers);
            debug!(
                session = %self.id,
                category = %category.id,
                answered = self.answers.len(),
                chars = text.chars().count(),
                "prompt compiled"
            );
            self.compiled_text = Some(text);
            self.state = WizardState::Result;
            return Ok(Advance::Completed);
        }

        self.current_index += 1;
        debug!(session = %self.id, index = self.current_index, "advanced");
        Ok(Advance::Moved(self.current_index))
    }

    /// Step back one question. Returns whether the index moved.
    pub fn retreat(&mut self) -> bool {
        if self.state != WizardState::Answering || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        debug!(session = %self.id, index = self.current_index, "retreated");
        true
    }

    /// Discard everything and return to the category menu
    pub fn restart(&mut self) {
        debug!(session = %self.id, "session restarted");
        self.state = WizardState::SelectingCategory;
        self.category = None;
        self.current_index = 0;
        self.answers.clear();
        self.compiled_text = None;
    }

    fn question(&self, question_id: &str) -> Result<&'static QuestionDefinition, WizardError> {
        let category = match (self.state, self.category) {
            (WizardState::Answering, Some(c)) => c,
            _ => return Err(WizardError::NotAnswering),
        };

        category
            .question(question_id)
            .ok_or_else(|| WizardError::UnknownQuestion {
                category: category.id.to_string(),
                question_id: question_id.to_string(),
            })
    }
}

//! Answer storage for an in-progress questionnaire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Value given for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Free text or a single picked option
    Text(String),
    /// Picked options, in the order they were picked
    Choices(Vec<String>),
}

impl AnswerValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn choices<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(items.into_iter().map(Into::into).collect())
    }

    /// True for whitespace-only text and for an empty list
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::Choices(v) => v.is_empty(),
        }
    }

    /// Render the value the way it appears in a compiled prompt
    pub fn render(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Choices(v) => v.join(", "),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(v: Vec<String>) -> Self {
        Self::Choices(v)
    }
}

/// Answers keyed by question id; the last write for an id wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: HashMap<String, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for a question
    pub fn record(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.answers.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// The answer only if it carries content
    pub fn present(&self, question_id: &str) -> Option<&AnswerValue> {
        self.get(question_id).filter(|v| !v.is_blank())
    }

    /// Rendered answer if present
    pub fn rendered(&self, question_id: &str) -> Option<String> {
        self.present(question_id).map(AnswerValue::render)
    }

    /// Add the option if it is not picked yet, drop it otherwise.
    ///
    /// A text answer stored under the id is replaced by a one-element list.
    pub fn toggle_choice(&mut self, question_id: &str, option: &str) {
        let entry = self
            .answers
            .entry(question_id.to_string())
            .or_insert_with(|| AnswerValue::Choices(Vec::new()));

        match entry {
            AnswerValue::Choices(picked) => {
                if let Some(pos) = picked.iter().position(|p| p == option) {
                    picked.remove(pos);
                } else {
                    picked.push(option.to_string());
                }
            }
            AnswerValue::Text(_) => {
                *entry = AnswerValue::Choices(vec![option.to_string()]);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

use thiserror::Error;

use crate::catalog::QuestionKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown prompt category: {0}")]
    UnknownCategory(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("No questionnaire in progress")]
    NotAnswering,

    #[error("Question '{question_id}' does not belong to category '{category}'")]
    UnknownQuestion {
        category: String,
        question_id: String,
    },

    #[error("Answer for '{question_id}' does not fit a {kind:?} question")]
    ShapeMismatch {
        question_id: String,
        kind: QuestionKind,
    },

    #[error("Required question '{question_id}' has not been answered")]
    RequiredUnanswered { question_id: String },
}

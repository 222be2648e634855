//! # promptwright-core
//!
//! Question catalog, wizard state machine and prompt templates.
//!
//! ## Key Types
//!
//! - [`CategoryId`] / [`Category`] - The fixed prompt categories and their questionnaires
//! - [`AnswerStore`] - Answers keyed by question id
//! - [`WizardSession`] - Drives a user from category menu to compiled prompt
//! - [`compile`] - Turns a finished answer set into prompt text

mod answers;
pub mod catalog;
mod compiler;
mod error;
mod wizard;

pub use answers::{AnswerStore, AnswerValue};
pub use catalog::{categories, Category, CategoryId, QuestionDefinition, QuestionKind};
pub use compiler::compile;
pub use error::{CatalogError, WizardError};
pub use wizard::{Advance, WizardSession, WizardState};

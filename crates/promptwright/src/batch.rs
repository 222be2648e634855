//! Non-interactive compile from an answers file.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use promptwright_core::{Advance, AnswerValue, CategoryId, WizardSession};
use promptwright_logging::{Logger, WizardEvent};

use crate::output;

/// Result printed with `--json-output`
#[derive(Debug, Serialize)]
pub struct CompileOutput {
    pub category: CategoryId,
    pub answers: BTreeMap<String, AnswerValue>,
    pub text: String,
}

/// Read answers keyed by question id. `.json` files are parsed as JSON,
/// anything else as TOML.
pub fn load_answers(path: &Path) -> Result<BTreeMap<String, AnswerValue>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let answers = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {} as TOML", path.display()))?
    };

    Ok(answers)
}

/// Walk a session through every question of `category` using `answers`
pub fn compile_answers(
    category: CategoryId,
    answers: &BTreeMap<String, AnswerValue>,
) -> Result<String> {
    let entry = category.category();

    let unknown: Vec<&str> = answers
        .keys()
        .map(String::as_str)
        .filter(|id| entry.question(id).is_none())
        .collect();
    if !unknown.is_empty() {
        bail!(
            "Answers file has questions that are not part of '{}': {}",
            category,
            unknown.join(", ")
        );
    }

    let mut session = WizardSession::new();
    session.select_category(category);

    while let Some(question) = session.current_question() {
        if let Some(value) = answers.get(question.id) {
            session
                .record_answer(question.id, value.clone())
                .with_context(|| format!("Invalid answer for '{}'", question.id))?;
        }

        if !session.can_advance() {
            bail!(
                "Missing required answer for '{}' ({})",
                question.id,
                question.prompt
            );
        }

        if let Advance::Completed = session.advance()? {
            break;
        }
    }

    session
        .compiled_text()
        .map(str::to_string)
        .context("Questionnaire did not finish")
}

pub fn handle_compile(
    category: CategoryId,
    answers_path: &Path,
    output_path: Option<&Path>,
    json_output: bool,
    logger: &Logger,
) -> Result<()> {
    let answers = load_answers(answers_path)?;
    let text = compile_answers(category, &answers)?;

    logger.log(&WizardEvent::PromptCompiled {
        category: category.to_string(),
        answered: answers.values().filter(|v| !v.is_blank()).count(),
        chars: text.chars().count(),
    });

    if let Some(path) = output_path {
        output::write_prompt(path, &text)?;
    }

    if json_output {
        let result = CompileOutput {
            category,
            answers,
            text,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if output_path.is_none() {
        println!("{}", text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_answers_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "answers.json",
            r#"{"summary-length": "Detalhado", "focus": ["Tudo"]}"#,
        );

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers["summary-length"], AnswerValue::text("Detalhado"));
        assert_eq!(answers["focus"], AnswerValue::choices(["Tudo"]));
    }

    #[test]
    fn test_load_answers_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "answers.toml",
            "source-language = \"Inglês\"\ntarget-language = \"Português\"\n",
        );

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers["target-language"], AnswerValue::text("Português"));
    }

    #[test]
    fn test_load_answers_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "answers.json", "{not json");

        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("answers.json"));
    }

    #[test]
    fn test_compile_answers_code_generation() {
        let answers = BTreeMap::from([
            ("language".to_string(), AnswerValue::text("Go")),
            ("functionality".to_string(), AnswerValue::text("sort a list")),
            ("complexity".to_string(), AnswerValue::text("Básico")),
            ("documentation".to_string(), AnswerValue::text("Não")),
        ]);

        let text = compile_answers(CategoryId::CodeGeneration, &answers).unwrap();

        assert!(text.starts_with("# Prompt para Geração de Código"));
        assert!(text.contains("sort a list"));
        assert!(!text.contains("Framework:"));
    }

    #[test]
    fn test_compile_answers_missing_required() {
        let answers = BTreeMap::from([("language".to_string(), AnswerValue::text("Go"))]);

        let err = compile_answers(CategoryId::CodeGeneration, &answers).unwrap_err();
        assert!(err.to_string().contains("functionality"));
    }

    #[test]
    fn test_compile_answers_rejects_foreign_questions() {
        let answers = BTreeMap::from([("genre".to_string(), AnswerValue::text("Fantasia"))]);

        let err = compile_answers(CategoryId::Translation, &answers).unwrap_err();
        assert!(err.to_string().contains("genre"));
    }

    #[test]
    fn test_compile_answers_rejects_wrong_shape() {
        let answers = BTreeMap::from([
            ("summary-length".to_string(), AnswerValue::text("Detalhado")),
            ("focus".to_string(), AnswerValue::text("Tudo")),
            ("format".to_string(), AnswerValue::text("Misto")),
        ]);

        let err = compile_answers(CategoryId::Summarization, &answers).unwrap_err();
        assert!(err.to_string().contains("focus"));
    }

    #[test]
    fn test_json_output_shape() {
        let answers = BTreeMap::from([
            ("bot-purpose".to_string(), AnswerValue::text("Suporte")),
            ("personality".to_string(), AnswerValue::text("Empático")),
            ("knowledge-area".to_string(), AnswerValue::text("telecom")),
            (
                "interaction-style".to_string(),
                AnswerValue::choices(["Fazer perguntas", "Dar exemplos"]),
            ),
        ]);
        let text = compile_answers(CategoryId::Chatbot, &answers).unwrap();

        let output = CompileOutput {
            category: CategoryId::Chatbot,
            answers,
            text: text.clone(),
        };
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["category"], "chatbot");
        assert_eq!(json["answers"]["personality"], "Empático");
        assert_eq!(
            json["answers"]["interaction-style"],
            serde_json::json!(["Fazer perguntas", "Dar exemplos"])
        );
        assert_eq!(json["text"], text.as_str());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_handle_compile_writes_output() {
        let dir = TempDir::new().unwrap();
        let answers = write(
            &dir,
            "answers.json",
            r#"{"custom-purpose": "Gerar nomes", "custom-requirements": "dez"}"#,
        );
        let out = dir.path().join("out").join("prompt.md");

        let logger = Logger::new(promptwright_logging::LogFormat::Pretty);
        handle_compile(CategoryId::Custom, &answers, Some(&out), false, &logger).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("Gerar nomes"));
    }
}

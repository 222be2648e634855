//! dialoguer-backed frontend for the wizard.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, FuzzySelect, Input, Select};

use promptwright_core::{
    categories, AnswerValue, CategoryId, QuestionDefinition, QuestionKind,
};

use crate::interactive::{Frontend, QuestionView, Reply};
use crate::output::progress_bar;

/// Menu entry and text shortcut for stepping back
const BACK_LABEL: &str = "← Anterior";
const BACK_SHORTCUT: &str = "<";

pub struct Terminal {
    theme: ColorfulTheme,
    use_editor: bool,
    /// Multi-select question being toggled and the last highlighted row
    toggling: Option<(&'static str, usize)>,
}

impl Terminal {
    pub fn new(use_editor: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            use_editor,
            toggling: None,
        }
    }

    fn print_header(&self, view: &QuestionView<'_>) {
        eprintln!();
        eprintln!(
            "{} {} {:.0}%",
            format!("Pergunta {} de {}", view.index + 1, view.total).bold(),
            progress_bar(view.progress, 24).bright_blue(),
            view.progress * 100.0
        );

        let mut hint = if view.question.kind.is_multi_choice() {
            format!("Enter: marcar/desmarcar, depois {}", next_label(view))
        } else {
            format!("Enter: {}", next_label(view))
        };
        if view.can_go_back && view.question.kind.is_free_text() {
            hint.push_str(&format!("   {}: {}", BACK_SHORTCUT, BACK_LABEL));
        }
        eprintln!("{}", hint.dimmed());
    }

    fn ask_text(&self, view: &QuestionView<'_>, prompt: &str) -> Result<Reply> {
        let initial = match view.current {
            Some(AnswerValue::Text(s)) => s.clone(),
            _ => String::new(),
        };

        let answer = if view.question.kind == QuestionKind::MultiLineText && self.use_editor {
            eprintln!("{} {}", "?".bright_yellow(), prompt.bold());
            Editor::new().edit(&initial)?.unwrap_or(initial)
        } else {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()?
        };

        if view.can_go_back && answer.trim() == BACK_SHORTCUT {
            return Ok(Reply::Back);
        }
        Ok(Reply::Answer(AnswerValue::Text(answer)))
    }

    fn ask_single(&self, view: &QuestionView<'_>, prompt: &str) -> Result<Reply> {
        let options = view.question.options;
        let mut items: Vec<&str> = options.to_vec();
        if view.can_go_back {
            items.push(BACK_LABEL);
        }

        let default = match view.current {
            Some(AnswerValue::Text(s)) => options.iter().position(|o| o == s).unwrap_or(0),
            _ => 0,
        };

        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(default)
            .interact()?;

        Ok(match options.get(picked) {
            Some(option) => Reply::Answer(AnswerValue::text(*option)),
            None => Reply::Back,
        })
    }

    /// One toggle per call; the loop asks again until Next or Back
    fn ask_multi(&mut self, view: &QuestionView<'_>, prompt: &str) -> Result<Reply> {
        let options = view.question.options;
        let picked: &[String] = match view.current {
            Some(AnswerValue::Choices(v)) => v,
            _ => &[],
        };

        let mut items: Vec<String> = options
            .iter()
            .map(|o| match picked.iter().position(|p| p == o) {
                Some(n) => format!("[x] {} ({})", o, n + 1),
                None => format!("[ ] {}", o),
            })
            .collect();
        items.push(next_label(view).to_string());
        if view.can_go_back {
            items.push(BACK_LABEL.to_string());
        }

        let cursor = match self.toggling {
            Some((id, row)) if id == view.question.id => row,
            _ => 0,
        };

        let row = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(cursor)
            .interact()?;

        if let Some(option) = options.get(row) {
            self.toggling = Some((view.question.id, row));
            return Ok(Reply::Toggle(option.to_string()));
        }

        self.toggling = None;
        Ok(if row == options.len() {
            Reply::Next
        } else {
            Reply::Back
        })
    }
}

fn next_label(view: &QuestionView<'_>) -> &'static str {
    if view.is_last {
        "Gerar Prompt ✨"
    } else {
        "Próxima →"
    }
}

/// Question text with the optional marker
fn prompt_label(question: &QuestionDefinition) -> String {
    if question.required || question.prompt.contains("(opcional)") {
        question.prompt.to_string()
    } else {
        format!("{} (opcional)", question.prompt)
    }
}

impl Frontend for Terminal {
    fn choose_category(&mut self) -> Result<CategoryId> {
        eprintln!();
        eprintln!("{}", "🎯 Assistente Construtor de Prompts".bold());
        eprintln!(
            "{}",
            "Crie prompts complexos e eficazes respondendo perguntas interativas".dimmed()
        );
        eprintln!();

        let all = categories();
        let items: Vec<String> = all
            .iter()
            .map(|c| format!("{}  {}", c.icon, c.display_name))
            .collect();

        let picked = FuzzySelect::with_theme(&self.theme)
            .with_prompt("Escolha o tipo de prompt que deseja criar")
            .items(&items)
            .default(0)
            .interact()?;

        Ok(all[picked].id)
    }

    fn ask(&mut self, view: &QuestionView<'_>) -> Result<Reply> {
        let toggling_this = matches!(self.toggling, Some((id, _)) if id == view.question.id);
        if !toggling_this {
            self.toggling = None;
            self.print_header(view);
        }
        let prompt = prompt_label(view.question);

        match view.question.kind {
            QuestionKind::SingleLineText | QuestionKind::MultiLineText => {
                self.ask_text(view, &prompt)
            }
            QuestionKind::SingleSelect | QuestionKind::ExclusiveChoice => {
                self.ask_single(view, &prompt)
            }
            QuestionKind::MultiSelect => self.ask_multi(view, &prompt),
        }
    }

    fn warn_required(&mut self, question: &QuestionDefinition) {
        eprintln!(
            "{} {}",
            "⚠".bright_yellow(),
            format!("Esta pergunta é obrigatória: {}", question.prompt).bright_yellow()
        );
    }

    fn show_result(&mut self, text: &str) {
        eprintln!();
        eprintln!("{}", "✅ Prompt Gerado com Sucesso!".bright_green().bold());
        eprintln!();
        println!("{}", text);
        eprintln!();
        eprintln!(
            "{} {}",
            "💡 Dica:".bold(),
            "Copie o prompt e cole em sua IA favorita para obter os melhores resultados!"
                .dimmed()
        );
    }

    fn another_round(&mut self) -> Result<bool> {
        eprintln!();
        let again = Confirm::with_theme(&self.theme)
            .with_prompt("🔄 Criar novo prompt?")
            .default(false)
            .interact()?;
        Ok(again)
    }
}

//! Prompt templates.
//!
//! A compiled prompt has three parts: a title, a recap of every answered
//! question, and a category-specific paragraph that weaves the answers into
//! fixed prose. Optional answers only show up when they carry content.

use crate::answers::AnswerStore;
use crate::catalog::{Category, CategoryId};

/// Compile the answers for `category` into the final prompt text
pub fn compile(category: CategoryId, answers: &AnswerStore) -> String {
    let entry = category.category();

    let mut out = format!("# Prompt para {}\n\n", entry.display_name);
    out.push_str(&recap(entry, answers));
    out.push_str("---\n\n## Prompt Completo:\n\n");

    let body = match category {
        CategoryId::CreativeWriting => creative_writing(answers),
        CategoryId::CodeGeneration => code_generation(answers),
        CategoryId::DataAnalysis => data_analysis(answers),
        CategoryId::ContentCreation => content_creation(answers),
        CategoryId::ProblemSolving => problem_solving(answers),
        CategoryId::Translation => translation(answers),
        CategoryId::Summarization => summarization(answers),
        CategoryId::Chatbot => chatbot(answers),
        CategoryId::Custom => custom(answers),
    };
    out.push_str(&body.render());
    out
}

/// Question/answer pairs in catalog order, skipping unanswered questions
fn recap(category: &Category, answers: &AnswerStore) -> String {
    let mut out = String::new();
    for question in category.questions {
        if let Some(value) = answers.rendered(question.id) {
            out.push_str(&format!("**{}**\n{}\n\n", question.prompt, value));
        }
    }
    out
}

/// Paragraph blocks separated by blank lines. Lines that resolve to `None`
/// are dropped, and a block left with no lines disappears with its spacing.
#[derive(Debug, Default)]
struct Template {
    blocks: Vec<Vec<String>>,
}

impl Template {
    fn new() -> Self {
        Self::default()
    }

    fn paragraph(self, text: impl Into<String>) -> Self {
        self.block([Some(text.into())])
    }

    fn block<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let lines: Vec<String> = lines.into_iter().flatten().collect();
        if !lines.is_empty() {
            self.blocks.push(lines);
        }
        self
    }

    fn render(&self) -> String {
        self.blocks
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Rendered answer, or empty text when missing
fn value(answers: &AnswerStore, id: &str) -> String {
    answers.rendered(id).unwrap_or_default()
}

/// `label` followed by the answer, always emitted
fn line(label: &str, answers: &AnswerStore, id: &str) -> Option<String> {
    Some(format!("{}{}", label, value(answers, id)))
}

/// `label` followed by the answer, only when the answer is present
fn optional(label: &str, answers: &AnswerStore, id: &str) -> Option<String> {
    answers
        .rendered(id)
        .map(|v| format!("{}{}", label, v))
}

fn creative_writing(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph(format!(
            "Por favor, escreva um texto no gênero {} com as seguintes especificações:",
            value(a, "genre")
        ))
        .block([line("Tom: ", a, "tone"), line("Tamanho: ", a, "length")])
        .block([line("Tema/Enredo: ", a, "topic")])
        .block([
            optional("Personagens: ", a, "characters"),
            optional("Estilo inspirado em: ", a, "style"),
        ])
        .paragraph(
            "Desenvolva a narrativa de forma envolvente, mantendo coerência e criatividade ao longo do texto.",
        )
}

fn code_generation(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph(format!(
            "Preciso que você desenvolva código na linguagem {} com os seguintes requisitos:",
            value(a, "language")
        ))
        .block([
            optional("Framework: ", a, "framework"),
            line("Funcionalidade: ", a, "functionality"),
        ])
        .block([line("Nível de complexidade: ", a, "complexity")])
        .block([optional("Requisitos específicos: ", a, "requirements")])
        .block([line("Documentação: ", a, "documentation")])
        .paragraph(
            "Por favor, forneça código limpo, bem estruturado e seguindo as melhores práticas da linguagem.",
        )
}

fn data_analysis(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph("Preciso de uma análise de dados com as seguintes características:")
        .block([
            line("Tipo de dados: ", a, "data-type"),
            line("Objetivo: ", a, "analysis-goal"),
        ])
        .block([line("Visualizações necessárias: ", a, "visualization")])
        .block([optional("Métodos estatísticos: ", a, "statistical-methods")])
        .paragraph(
            "Por favor, forneça uma análise completa, incluindo insights e recomendações baseadas nos dados.",
        )
}

fn content_creation(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph(format!(
            "Crie um(a) {} com as seguintes especificações:",
            value(a, "content-type")
        ))
        .block([
            line("Público-alvo: ", a, "audience"),
            line("Objetivo: ", a, "goal"),
            line("Tom de voz: ", a, "tone-voice"),
        ])
        .block([optional("Palavras-chave a incluir: ", a, "keywords")])
        .paragraph(
            "O conteúdo deve ser envolvente, relevante para o público e atingir o objetivo proposto.",
        )
}

fn problem_solving(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph("Preciso de ajuda para resolver o seguinte problema:")
        .paragraph(value(a, "problem-description"))
        .block([
            optional("Contexto: ", a, "context"),
            optional("Restrições: ", a, "constraints"),
        ])
        .block([line("Tipo de solução desejada: ", a, "solution-type")])
        .paragraph("Por favor, forneça uma análise completa e soluções práticas e aplicáveis.")
}

fn translation(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph(format!(
            "Por favor, traduza o seguinte texto de {} para {}:",
            value(a, "source-language"),
            value(a, "target-language")
        ))
        .paragraph("[INSIRA SEU TEXTO AQUI]")
        .block([
            Some("Especificações:".to_string()),
            line("- Nível de formalidade: ", a, "formality"),
            line("- Contexto: ", a, "context-translation"),
        ])
        .paragraph(
            "Mantenha o significado e a intenção original do texto, adaptando expressões idiomáticas quando necessário.",
        )
}

fn summarization(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph("Por favor, resuma o seguinte texto:")
        .paragraph("[INSIRA SEU TEXTO AQUI]")
        .block([
            Some("Especificações do resumo:".to_string()),
            line("- Tamanho: ", a, "summary-length"),
            line("- Foco: ", a, "focus"),
            line("- Formato: ", a, "format"),
        ])
        .paragraph("Mantenha os pontos mais importantes e relevantes do texto original.")
}

fn chatbot(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph("Você é um assistente virtual com as seguintes características:")
        .block([
            line("Função: ", a, "bot-purpose"),
            line("Personalidade: ", a, "personality"),
            line("Área de especialização: ", a, "knowledge-area"),
            line("Estilo de interação: ", a, "interaction-style"),
        ])
        .paragraph(
            "Sempre responda de acordo com sua função e personalidade, mantendo-se no contexto da sua área de especialização. Seja útil, claro e engajante em suas interações.",
        )
}

fn custom(a: &AnswerStore) -> Template {
    Template::new()
        .paragraph(value(a, "custom-purpose"))
        .block([
            Some("Requisitos:".to_string()),
            Some(value(a, "custom-requirements")),
        ])
        .block([
            optional("Restrições: ", a, "custom-constraints"),
            optional("Formato esperado: ", a, "custom-format"),
            optional("Exemplos: ", a, "custom-examples"),
        ])
}

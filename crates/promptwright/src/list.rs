use colored::Colorize;

use promptwright_core::{categories, Category, QuestionKind};

pub fn handle_list(verbose: bool) {
    for category in categories() {
        print_category(category, verbose);
    }
}

fn print_category(category: &Category, verbose: bool) {
    println!(
        "{}  {:<18} {} {}",
        category.icon,
        category.id.as_str().bright_cyan(),
        category.display_name.bold(),
        format!("({} perguntas)", category.questions.len()).dimmed()
    );

    if !verbose {
        return;
    }

    for (i, question) in category.questions.iter().enumerate() {
        let optional = if question.required { "" } else { " (opcional)" };
        println!(
            "     {}. {} {}{}",
            i + 1,
            question.prompt,
            format!("[{}, {}]", question.id, kind_label(question.kind)).dimmed(),
            optional.dimmed()
        );
        if !question.options.is_empty() {
            println!("        {}", question.options.join(" | ").dimmed());
        }
    }
    println!();
}

fn kind_label(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::SingleLineText => "text",
        QuestionKind::MultiLineText => "textarea",
        QuestionKind::SingleSelect => "select",
        QuestionKind::ExclusiveChoice => "radio",
        QuestionKind::MultiSelect => "multiselect",
    }
}

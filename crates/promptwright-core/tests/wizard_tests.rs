use promptwright_core::{
    categories, Advance, AnswerValue, CategoryId, QuestionKind, WizardError, WizardSession,
    WizardState,
};

/// Helper: walk every question, answering the ones listed in `answers`.
fn run_through(session: &mut WizardSession, answers: &[(&str, AnswerValue)]) -> usize {
    let mut steps = 0;
    loop {
        let question = session.current_question().expect("session is answering");
        if let Some((_, value)) = answers.iter().find(|(id, _)| *id == question.id) {
            session.record_answer(question.id, value.clone()).unwrap();
        }
        steps += 1;
        match session.advance().unwrap() {
            Advance::Moved(index) => assert_eq!(index, steps),
            Advance::Completed => return steps,
        }
    }
}

fn code_generation_answers() -> Vec<(&'static str, AnswerValue)> {
    vec![
        ("language", "Go".into()),
        ("functionality", "sort a list".into()),
        ("complexity", "Básico".into()),
        ("documentation", "Não".into()),
    ]
}

// ============================================================
// Catalog properties
// ============================================================

#[test]
fn test_every_category_is_reachable_and_non_empty() {
    for category in categories() {
        let mut session = WizardSession::new();
        session.select_category(category.id);

        assert_eq!(session.state(), WizardState::Answering);
        assert_eq!(session.current_index(), 0);
        assert_eq!(
            session.current_question().map(|q| q.id),
            category.questions.first().map(|q| q.id)
        );
    }
}

// ============================================================
// Admission control
// ============================================================

#[test]
fn test_can_advance_on_required_question() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);

    // language is required
    assert!(!session.can_advance());

    session.record_answer("language", "   ".into()).unwrap();
    assert!(!session.can_advance());

    session.record_answer("language", "Go".into()).unwrap();
    assert!(session.can_advance());
}

#[test]
fn test_can_advance_on_optional_question() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);
    session.record_answer("language", "Rust".into()).unwrap();
    session.advance().unwrap();

    let question = session.current_question().unwrap();
    assert_eq!(question.id, "framework");
    assert!(!question.required);
    assert!(session.can_advance());
}

#[test]
fn test_can_advance_on_empty_multi_select() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::Summarization);
    session.record_answer("summary-length", "Curto (1 parágrafo)".into()).unwrap();
    session.advance().unwrap();

    assert_eq!(session.current_question().unwrap().kind, QuestionKind::MultiSelect);
    session.record_answer("focus", AnswerValue::Choices(vec![])).unwrap();
    assert!(!session.can_advance());

    session.toggle_choice("focus", "Tudo").unwrap();
    assert!(session.can_advance());

    session.toggle_choice("focus", "Tudo").unwrap();
    assert!(!session.can_advance());
}

// ============================================================
// Full runs
// ============================================================

#[test]
fn test_code_generation_run_omits_unanswered_framework() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);

    let steps = run_through(&mut session, &code_generation_answers());
    assert_eq!(steps, 6);
    assert_eq!(session.state(), WizardState::Result);
    assert_eq!(session.progress_fraction(), 1.0);

    let text = session.compiled_text().unwrap();
    assert!(text.contains("Go"));
    assert!(text.contains("sort a list"));
    assert!(text.contains("Básico"));
    assert!(!text.contains("Framework:"));
    assert!(!text.contains("Requisitos específicos:"));
    assert!(text.contains("Preciso que você desenvolva código na linguagem Go"));
}

#[test]
fn test_multi_select_renders_in_selection_order() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::DataAnalysis);
    session.record_answer("data-type", "Mistos".into()).unwrap();
    session.advance().unwrap();
    session.record_answer("analysis-goal", "churn drivers".into()).unwrap();
    session.advance().unwrap();

    // Tabelas (B) picked before Gráficos (A)
    session.toggle_choice("visualization", "Tabelas").unwrap();
    session.toggle_choice("visualization", "Gráficos").unwrap();
    session.advance().unwrap();
    assert_eq!(session.advance().unwrap(), Advance::Completed);

    let text = session.compiled_text().unwrap();
    assert!(text.contains("**Precisa de visualizações?**\nTabelas, Gráficos\n"));
    assert!(text.contains("Visualizações necessárias: Tabelas, Gráficos"));
}

#[test]
fn test_answers_survive_retreat() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::Translation);
    session.record_answer("source-language", "Inglês".into()).unwrap();
    session.advance().unwrap();

    assert!(session.retreat());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_answer(), Some(&AnswerValue::text("Inglês")));
    assert!(session.can_advance());
}

#[test]
fn test_changing_an_answer_overwrites_it() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);
    session.record_answer("language", "Rust".into()).unwrap();
    session.record_answer("language", "Go".into()).unwrap();
    assert_eq!(session.current_answer(), Some(&AnswerValue::text("Go")));

    let answers: Vec<_> = code_generation_answers()
        .into_iter()
        .filter(|(id, _)| *id != "language")
        .collect();
    run_through(&mut session, &answers);

    let text = session.compiled_text().unwrap();
    assert!(text.contains("linguagem Go"));
    assert!(!text.contains("Rust"));
    assert_eq!(session.answers().len(), 4);
}

// ============================================================
// Navigation edge cases
// ============================================================

#[test]
fn test_retreat_at_first_question_is_noop() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::Chatbot);
    session.record_answer("bot-purpose", "help desk".into()).unwrap();

    assert!(!session.retreat());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.state(), WizardState::Answering);
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn test_retreat_outside_answering_is_noop() {
    let mut session = WizardSession::new();
    assert!(!session.retreat());
    assert_eq!(session.state(), WizardState::SelectingCategory);
}

#[test]
fn test_restart_after_result() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);
    run_through(&mut session, &code_generation_answers());
    assert!(session.compiled_text().is_some());

    session.restart();

    assert_eq!(session.state(), WizardState::SelectingCategory);
    assert!(session.answers().is_empty());
    assert!(session.compiled_text().is_none());
    assert!(session.category().is_none());
    assert_eq!(session.current_index(), 0);
}

#[test]
fn test_advance_after_result_is_rejected() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);
    run_through(&mut session, &code_generation_answers());

    assert_eq!(session.advance(), Err(WizardError::NotAnswering));
    assert!(session.current_question().is_none());
}

#[test]
fn test_new_category_after_restart_starts_clean() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);
    session.record_answer("language", "Go".into()).unwrap();
    session.restart();

    session.select_category(CategoryId::Custom);
    assert!(session.answers().is_empty());
    assert_eq!(session.current_question().unwrap().id, "custom-purpose");
}

// ============================================================
// Compiled text lifecycle
// ============================================================

#[test]
fn test_compiled_text_absent_until_result() {
    let mut session = WizardSession::new();
    assert!(session.compiled_text().is_none());

    session.select_category(CategoryId::CodeGeneration);
    for (id, value) in code_generation_answers() {
        session.record_answer(id, value).unwrap();
    }

    // walk to the last question without compiling
    while !session.is_last_question() {
        assert_eq!(session.state(), WizardState::Answering);
        assert!(session.compiled_text().is_none());
        session.advance().unwrap();
    }
    assert!(session.compiled_text().is_none());

    assert_eq!(session.advance(), Ok(Advance::Completed));
    assert_eq!(session.state(), WizardState::Result);
    assert!(session.compiled_text().is_some());
}

#[test]
fn test_result_is_frozen() {
    let mut session = WizardSession::new();
    session.select_category(CategoryId::CodeGeneration);
    run_through(&mut session, &code_generation_answers());
    let compiled = session.compiled_text().map(str::to_string);

    session.select_category(CategoryId::Translation);
    assert_eq!(
        session.record_answer("language", "Rust".into()),
        Err(WizardError::NotAnswering)
    );
    assert_eq!(
        session.toggle_choice("language", "Rust"),
        Err(WizardError::NotAnswering)
    );

    assert_eq!(session.state(), WizardState::Result);
    assert_eq!(
        session.category().map(|c| c.id),
        Some(CategoryId::CodeGeneration)
    );
    assert_eq!(session.answers().get("language"), Some(&AnswerValue::text("Go")));
    assert_eq!(session.compiled_text().map(str::to_string), compiled);
}

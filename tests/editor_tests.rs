use orcamento_core::{editor::BudgetEditor, errors::EditorError, money::Amount};

fn add_service(editor: &mut BudgetEditor, name: &str, amount: &str) {
    editor.set_service_name(name);
    editor.set_amount_input(amount);
    editor.add_or_save_service().expect("service should be accepted");
}

fn finalize(editor: &mut BudgetEditor, client: &str, date: &str) {
    editor.set_client_name(client);
    editor.set_visit_date(date);
    editor.finalize_budget().expect("budget should finalize");
}

#[test]
fn parsed_amounts_are_stored_rounded_to_cents() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "Troca de gás", "120.456");
    assert_eq!(editor.draft_services()[0].amount, Amount::from_cents(12_046));
    assert_eq!(editor.draft_services()[0].amount.to_string(), "120.46");
}

#[test]
fn fixed_price_keywords_ignore_the_amount_field() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "manutenção", "999");
    add_service(&mut editor, "limpeza", "");
    add_service(&mut editor, "Limpeza", "0.01");
    let amounts: Vec<String> = editor
        .draft_services()
        .iter()
        .map(|s| s.amount.to_string())
        .collect();
    assert_eq!(amounts, ["300.00", "150.00", "150.00"]);
}

#[test]
fn missing_name_or_amount_fails_without_mutation() {
    let mut editor = BudgetEditor::new();

    editor.set_service_name("");
    editor.set_amount_input("10");
    assert_eq!(
        editor.add_or_save_service(),
        Err(EditorError::MissingServiceFields)
    );

    editor.set_service_name("Troca de gás");
    editor.set_amount_input("");
    assert_eq!(
        editor.add_or_save_service(),
        Err(EditorError::MissingServiceFields)
    );

    assert!(editor.draft_services().is_empty());
    assert_eq!(editor.service_name(), "Troca de gás");
    assert_eq!(editor.amount_input(), "");
}

#[test]
fn non_numeric_amount_is_rejected() {
    let mut editor = BudgetEditor::new();
    editor.set_service_name("Troca de gás");
    editor.set_amount_input("cem reais");
    assert!(matches!(
        editor.add_or_save_service(),
        Err(EditorError::InvalidAmount(_))
    ));
    assert!(editor.draft_services().is_empty());
}

#[test]
fn successful_add_clears_the_service_fields() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "Troca de gás", "120.00");
    assert_eq!(editor.service_name(), "");
    assert_eq!(editor.amount_input(), "");
}

#[test]
fn finalize_requires_client_date_and_services() {
    let mut editor = BudgetEditor::new();

    editor.set_client_name("João");
    editor.set_visit_date("2024-03-01");
    assert_eq!(editor.finalize_budget(), Err(EditorError::IncompleteBudget));

    add_service(&mut editor, "limpeza", "");
    editor.set_client_name("");
    assert_eq!(editor.finalize_budget(), Err(EditorError::IncompleteBudget));

    editor.set_client_name("João");
    editor.set_visit_date("");
    assert_eq!(editor.finalize_budget(), Err(EditorError::IncompleteBudget));

    assert!(editor.budgets().is_empty());
}

#[test]
fn finalize_totals_and_resets_the_draft() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "Troca de gás", "120.00");
    assert_eq!(editor.partial_total().to_string(), "120.00");

    finalize(&mut editor, "João", "2024-03-01");

    assert_eq!(editor.budgets().len(), 1);
    assert_eq!(editor.budgets()[0].total.to_string(), "120.00");
    assert_eq!(editor.budgets()[0].client_name, "João");
    assert!(editor.draft_services().is_empty());
    assert_eq!(editor.client_name(), "");
    assert_eq!(editor.visit_date(), "");
}

#[test]
fn totals_sum_before_formatting() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "A", "120.00");
    add_service(&mut editor, "B", "33.35");
    assert_eq!(editor.partial_total().to_string(), "153.35");
    finalize(&mut editor, "Maria", "2024-04-02");
    assert_eq!(editor.budgets()[0].total.to_string(), "153.35");
}

#[test]
fn editing_a_budget_replaces_it_in_place() {
    let mut editor = BudgetEditor::new();
    for (client, date) in [
        ("Ana", "2024-01-01"),
        ("Bruno", "2024-01-02"),
        ("Carla", "2024-01-03"),
    ] {
        add_service(&mut editor, "limpeza", "");
        finalize(&mut editor, client, date);
    }

    editor.edit_budget(1).unwrap();
    assert_eq!(editor.client_name(), "Bruno");
    assert_eq!(editor.draft_services().len(), 1);

    add_service(&mut editor, "manutenção", "");
    finalize(&mut editor, "Bruno Silva", "2024-01-02");

    let clients: Vec<&str> = editor
        .budgets()
        .iter()
        .map(|b| b.client_name.as_str())
        .collect();
    assert_eq!(clients, ["Ana", "Bruno Silva", "Carla"]);
    assert_eq!(editor.budgets()[1].total.to_string(), "450.00");
}

#[test]
fn editing_a_budget_copies_rather_than_aliases_its_services() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "limpeza", "");
    finalize(&mut editor, "Ana", "2024-01-01");

    editor.edit_budget(0).unwrap();
    add_service(&mut editor, "manutenção", "");

    // The stored budget is untouched until finalize.
    assert_eq!(editor.budgets()[0].service_count(), 1);
    assert_eq!(editor.draft_services().len(), 2);
}

#[test]
fn removing_a_budget_shifts_later_entries_left() {
    let mut editor = BudgetEditor::new();
    for client in ["Ana", "Bruno", "Carla"] {
        add_service(&mut editor, "limpeza", "");
        finalize(&mut editor, client, "2024-01-01");
    }

    editor.remove_budget(0).unwrap();

    let clients: Vec<&str> = editor
        .budgets()
        .iter()
        .map(|b| b.client_name.as_str())
        .collect();
    assert_eq!(clients, ["Bruno", "Carla"]);
    assert_eq!(
        editor.remove_budget(5),
        Err(EditorError::NoSuchEntry(5))
    );
}

#[test]
fn budget_cursor_survives_removal_of_an_earlier_budget() {
    let mut editor = BudgetEditor::new();
    for client in ["Ana", "Bruno", "Carla"] {
        add_service(&mut editor, "limpeza", "");
        finalize(&mut editor, client, "2024-01-01");
    }

    editor.edit_budget(2).unwrap();
    editor.remove_budget(0).unwrap();

    // Carla now sits at index 1; the cursor still points at her entry.
    assert_eq!(editor.budget_edit_pending(), Some(1));
    finalize(&mut editor, "Carla Souza", "2024-01-03");

    let clients: Vec<&str> = editor
        .budgets()
        .iter()
        .map(|b| b.client_name.as_str())
        .collect();
    assert_eq!(clients, ["Bruno", "Carla Souza"]);
}

#[test]
fn removing_the_edited_budget_clears_the_cursor() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "limpeza", "");
    finalize(&mut editor, "Ana", "2024-01-01");

    editor.edit_budget(0).unwrap();
    editor.remove_budget(0).unwrap();
    assert_eq!(editor.budget_edit_pending(), None);

    // Finalizing now appends instead of replacing a ghost entry.
    finalize(&mut editor, "Ana", "2024-01-01");
    assert_eq!(editor.budgets().len(), 1);
}

#[test]
fn service_cursor_survives_removal_of_an_earlier_service() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "A", "10");
    add_service(&mut editor, "B", "20");
    add_service(&mut editor, "C", "30");

    editor.edit_service(2).unwrap();
    editor.remove_service(0).unwrap();
    assert_eq!(editor.service_edit_pending(), Some(1));

    editor.set_service_name("C2");
    editor.set_amount_input("35");
    editor.add_or_save_service().unwrap();

    let names: Vec<&str> = editor
        .draft_services()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, ["B", "C2"]);
}

#[test]
fn removing_the_edited_service_cancels_the_edit() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "A", "10");
    editor.edit_service(0).unwrap();
    assert_eq!(editor.service_name(), "A");

    editor.remove_service(0).unwrap();
    assert_eq!(editor.service_edit_pending(), None);
    assert_eq!(editor.service_name(), "");
    assert_eq!(editor.amount_input(), "");
}

#[test]
fn edit_service_loads_the_fields_without_mutating_the_list() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "Troca de gás", "120.00");
    editor.edit_service(0).unwrap();
    assert_eq!(editor.service_name(), "Troca de gás");
    assert_eq!(editor.amount_input(), "120.00");
    assert_eq!(editor.draft_services().len(), 1);
    assert_eq!(
        editor.edit_service(7),
        Err(EditorError::NoSuchEntry(7))
    );
}

#[test]
fn service_cursor_is_independent_of_budget_finalize() {
    let mut editor = BudgetEditor::new();
    add_service(&mut editor, "A", "10");
    add_service(&mut editor, "B", "20");
    editor.edit_service(1).unwrap();

    // Finalize fails (no client); the pending service edit is untouched.
    assert_eq!(editor.finalize_budget(), Err(EditorError::IncompleteBudget));
    assert_eq!(editor.service_edit_pending(), Some(1));
}

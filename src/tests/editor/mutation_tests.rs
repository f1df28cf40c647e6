use crate::domain::{DEFAULT_FORM_TITLE, FieldKind, Form};
use crate::editor::{EditorCommand, FieldPatch, FormEditor, InspectorView};

fn field_ids(editor: &FormEditor) -> Vec<String> {
    editor
        .form()
        .fields
        .iter()
        .map(|field| field.id.clone())
        .collect()
}

#[test]
fn added_fields_keep_call_order() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.add_field(FieldKind::Email);
    editor.add_field(FieldKind::Date);

    let kinds: Vec<_> = editor
        .form()
        .fields
        .iter()
        .map(|field| field.kind)
        .collect();
    assert_eq!(kinds, [FieldKind::Text, FieldKind::Email, FieldKind::Date]);
    assert_eq!(editor.selected_index(), Some(2), "each add selects the new field");
}

#[test]
fn remove_always_clears_the_selection() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.add_field(FieldKind::Number);
    editor.select_field(0);

    editor.remove_field(1);
    assert_eq!(editor.form().fields.len(), 1);
    assert_eq!(editor.selected_index(), None);
}

#[test]
fn out_of_range_remove_changes_nothing() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.select_field(0);
    let before = editor.revisions();

    editor.remove_field(9);
    assert_eq!(editor.form().fields.len(), 1);
    assert_eq!(editor.selected_index(), Some(0));
    assert_eq!(editor.revisions(), before);
}

#[test]
fn out_of_range_move_is_an_idempotent_no_op() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.add_field(FieldKind::Email);
    editor.select_field(1);
    let ids = field_ids(&editor);
    let before = editor.revisions();

    assert!(!editor.move_field(0, 5));
    assert!(!editor.move_field(7, 0));
    assert_eq!(field_ids(&editor), ids);
    assert_eq!(editor.selected_index(), Some(1));
    assert_eq!(editor.revisions(), before, "refused moves must not invalidate views");
}

#[test]
fn move_permutes_without_loss_and_follows_the_field() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.add_field(FieldKind::Email);
    editor.add_field(FieldKind::Date);
    let mut ids = field_ids(&editor);

    assert!(editor.move_field(0, 2));
    assert_eq!(editor.selected_index(), Some(2));

    let moved = field_ids(&editor);
    assert_eq!(moved[2], ids[0], "first field landed at the target");
    let mut sorted_before = ids.clone();
    let mut sorted_after = moved.clone();
    sorted_before.sort();
    sorted_after.sort();
    assert_eq!(sorted_before, sorted_after, "move is a permutation");

    ids.rotate_left(1);
    assert_eq!(moved, ids);
}

#[test]
fn move_by_stops_at_the_ends() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.add_field(FieldKind::Email);
    let ids = field_ids(&editor);

    assert!(!editor.move_field_by(0, -1));
    assert!(!editor.move_field_by(1, 3));
    assert_eq!(field_ids(&editor), ids);

    assert!(editor.move_field_by(1, -1));
    assert_eq!(field_ids(&editor), [ids[1].clone(), ids[0].clone()]);
    assert_eq!(editor.selected_index(), Some(0));
}

#[test]
fn selection_bumps_only_the_inspector_revision() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.add_field(FieldKind::Email);
    let before = editor.revisions();

    editor.select_field(0);
    let after = editor.revisions();
    assert_eq!(after.field_list, before.field_list);
    assert_eq!(after.inspector, before.inspector + 1);

    editor.select_field(0);
    assert_eq!(editor.revisions(), after, "re-selecting the same field is not a change");

    editor.clear_selection();
    assert_eq!(editor.revisions().inspector, after.inspector + 1);
    assert_eq!(editor.revisions().field_list, before.field_list);
}

#[test]
fn selecting_past_the_end_resets_to_no_selection() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    editor.select_field(4);
    assert_eq!(editor.selected_index(), None);
    assert!(matches!(editor.inspector_view(), InspectorView::Empty));
}

#[test]
fn update_applies_patch_and_bumps_both_views() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Text);
    let before = editor.revisions();

    editor.update_field(0, FieldPatch::label("Your name"));
    assert_eq!(editor.form().fields[0].label, "Your name");
    assert_eq!(editor.revisions().field_list, before.field_list + 1);
    assert_eq!(editor.revisions().inspector, before.inspector + 1);

    let current = editor.revisions();
    editor.update_field(3, FieldPatch::label("nope"));
    editor.update_field(0, FieldPatch::default());
    assert_eq!(editor.revisions(), current, "stale index and empty patch are no-ops");
}

#[test]
fn blank_options_text_clears_the_option_list() {
    let mut editor = FormEditor::new();
    editor.add_field(FieldKind::Select);
    assert_eq!(editor.form().fields[0].options, ["Option 1", "Option 2"]);

    editor.update_field(0, FieldPatch::options_from_lines("\n   \n\t\n"));
    assert!(editor.form().fields[0].options.is_empty());
}

#[test]
fn commands_route_to_the_matching_operations() {
    let mut editor = FormEditor::new();
    editor.apply(EditorCommand::AddField(FieldKind::Radio));
    editor.apply(EditorCommand::AddField(FieldKind::Text));
    editor.apply(EditorCommand::MoveField { from: 1, to: 0 });
    editor.apply(EditorCommand::UpdateField {
        index: 0,
        patch: FieldPatch::required(true),
    });
    editor.apply(EditorCommand::SelectField(1));
    editor.apply(EditorCommand::ClearSelection);

    assert_eq!(editor.form().fields[0].kind, FieldKind::Text);
    assert!(editor.form().fields[0].required);
    assert_eq!(editor.selected_index(), None);

    editor.apply(EditorCommand::RemoveField(0));
    assert_eq!(editor.form().fields.len(), 1);
}

#[test]
fn blank_titles_fall_back_to_the_default() {
    let mut form = Form::new();
    form.title = "   ".to_string();
    let editor = FormEditor::with_form(form);
    assert_eq!(editor.form().title, DEFAULT_FORM_TITLE);

    let mut editor = FormEditor::new();
    editor.set_title("Feedback");
    assert_eq!(editor.form().title, "Feedback");
    editor.set_title("");
    assert_eq!(editor.form().title, DEFAULT_FORM_TITLE);
}

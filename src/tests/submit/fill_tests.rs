use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::{Field, FieldKind, Form};
use crate::submit::{FillState, FillValue};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn order_form() -> Form {
    let mut form = Form::new();
    form.set_title("Pizza Order");
    let mut name = Field::new(FieldKind::Text);
    name.label = "Name".to_string();
    form.fields.push(name);
    let mut toppings = Field::new(FieldKind::Checkbox);
    toppings.options = vec![
        "Olives".to_string(),
        "Onion".to_string(),
        "Extra cheese".to_string(),
    ];
    form.fields.push(toppings);
    form
}

fn type_into(fill: &mut FillState, text: &str) {
    for ch in text.chars() {
        let Some(field) = fill.focused_mut() else {
            return;
        };
        field.handle_key(&key(KeyCode::Char(ch)));
    }
}

#[test]
fn entries_follow_field_order_and_repeat_checked_boxes() {
    let form = order_form();
    let name_id = form.fields[0].id.clone();
    let toppings_id = form.fields[1].id.clone();
    let mut fill = FillState::new(&form);

    type_into(&mut fill, "Ann");
    fill.focus_next();
    let boxes = fill.focused_mut().unwrap();
    boxes.handle_key(&key(KeyCode::Char(' ')));
    boxes.handle_key(&key(KeyCode::Right));
    boxes.handle_key(&key(KeyCode::Right));
    boxes.handle_key(&key(KeyCode::Char(' ')));

    assert_eq!(
        fill.entries(),
        vec![
            (name_id, "Ann".to_string()),
            (toppings_id.clone(), "Olives".to_string()),
            (toppings_id, "Extra cheese".to_string()),
        ]
    );
}

#[test]
fn unanswered_choices_emit_nothing_but_text_emits_blank() {
    let mut form = Form::new();
    form.fields.push(Field::new(FieldKind::Text));
    form.fields.push(Field::new(FieldKind::Radio));
    form.fields.push(Field::new(FieldKind::Checkbox));
    let fill = FillState::new(&form);

    let entries = fill.entries();
    assert_eq!(entries.len(), 1, "only the text field contributes untouched");
    assert_eq!(entries[0], (form.fields[0].id.clone(), String::new()));
}

#[test]
fn each_kind_starts_with_its_own_answer_shape() {
    let mut form = Form::new();
    for kind in FieldKind::ALL {
        form.fields.push(Field::new(kind));
    }
    let fill = FillState::new(&form);

    for field in fill.fields() {
        match field.field().kind {
            FieldKind::Select | FieldKind::Radio => {
                assert_eq!(field.value(), &FillValue::Choice(None));
            }
            FieldKind::Checkbox => {
                assert_eq!(
                    field.value(),
                    &FillValue::Checks {
                        cursor: 0,
                        checked: vec![false, false],
                    }
                );
            }
            _ => assert_eq!(field.value(), &FillValue::Text(String::new())),
        }
    }
}

#[test]
fn focus_wraps_around_both_ends() {
    let form = order_form();
    let mut fill = FillState::new(&form);
    assert_eq!(fill.focus(), 0);

    fill.focus_prev();
    assert_eq!(fill.focus(), 1, "backing off the first field lands on the last");
    fill.focus_next();
    assert_eq!(fill.focus(), 0);
    fill.focus_next();
    fill.focus_next();
    assert_eq!(fill.focus(), 0, "advancing past the last wraps to the first");
}

#[test]
fn an_empty_form_has_no_focus_and_no_entries() {
    let mut fill = FillState::new(&Form::new());
    assert!(fill.is_empty());
    assert!(fill.focused().is_none());
    fill.focus_next();
    fill.focus_prev();
    assert_eq!(fill.focus(), 0);
    assert!(fill.entries().is_empty());
}

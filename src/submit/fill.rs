use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{Field, FieldKind, Form};

/// In-progress answer for one field, shaped by the field's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillValue {
    /// Free text, including email, number, and date entry.
    Text(String),
    /// Single pick among the field's options; `None` until answered.
    Choice(Option<usize>),
    /// Independent toggles, one per option, plus the toggle cursor.
    Checks { cursor: usize, checked: Vec<bool> },
}

/// One field of a filling session together with its answer buffer.
#[derive(Debug, Clone)]
pub struct FieldFill {
    field: Field,
    value: FillValue,
}

impl FieldFill {
    pub fn new(field: Field) -> Self {
        let value = match field.kind {
            FieldKind::Select | FieldKind::Radio => FillValue::Choice(None),
            FieldKind::Checkbox => FillValue::Checks {
                cursor: 0,
                checked: vec![false; field.options.len()],
            },
            _ => FillValue::Text(String::new()),
        };
        FieldFill { field, value }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn value(&self) -> &FillValue {
        &self.value
    }

    /// Feeds one key into the answer. Returns whether it changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let option_count = self.field.options.len();
        match &mut self.value {
            FillValue::Text(buffer) => {
                let multiline = self.field.kind == FieldKind::LongText;
                apply_text_key(buffer, key, multiline)
            }
            FillValue::Choice(selected) => {
                if option_count == 0 {
                    return false;
                }
                match key.code {
                    KeyCode::Left => {
                        *selected = Some(match *selected {
                            Some(current) => wrap_index(current as i64 - 1, option_count),
                            None => option_count - 1,
                        });
                        true
                    }
                    KeyCode::Right => {
                        *selected = Some(match *selected {
                            Some(current) => wrap_index(current as i64 + 1, option_count),
                            None => 0,
                        });
                        true
                    }
                    _ => false,
                }
            }
            FillValue::Checks { cursor, checked } => {
                if option_count == 0 {
                    return false;
                }
                match key.code {
                    KeyCode::Left => {
                        *cursor = wrap_index(*cursor as i64 - 1, option_count);
                        true
                    }
                    KeyCode::Right => {
                        *cursor = wrap_index(*cursor as i64 + 1, option_count);
                        true
                    }
                    KeyCode::Char(' ') => {
                        checked[*cursor] = !checked[*cursor];
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Appends this field's raw submission entries. Text answers are
    /// always present, even blank; choice answers only once made; each
    /// checked box contributes its own entry under the field's id.
    pub fn entries(&self, out: &mut Vec<(String, String)>) {
        match &self.value {
            FillValue::Text(buffer) => out.push((self.field.id.clone(), buffer.clone())),
            FillValue::Choice(selected) => {
                if let Some(index) = *selected
                    && let Some(option) = self.field.options.get(index)
                {
                    out.push((self.field.id.clone(), option.clone()));
                }
            }
            FillValue::Checks { checked, .. } => {
                for (option, _) in self
                    .field
                    .options
                    .iter()
                    .zip(checked)
                    .filter(|(_, picked)| **picked)
                {
                    out.push((self.field.id.clone(), option.clone()));
                }
            }
        }
    }
}

/// A respondent's pass over every field of a form, with one focused
/// field receiving keystrokes.
#[derive(Debug, Clone)]
pub struct FillState {
    fields: Vec<FieldFill>,
    focus: usize,
}

impl FillState {
    pub fn new(form: &Form) -> Self {
        FillState {
            fields: form.fields.iter().cloned().map(FieldFill::new).collect(),
            focus: 0,
        }
    }

    pub fn fields(&self) -> &[FieldFill] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&FieldFill> {
        self.fields.get(self.focus)
    }

    pub fn focused_mut(&mut self) -> Option<&mut FieldFill> {
        self.fields.get_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = wrap_index(self.focus as i64 + 1, self.fields.len());
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = wrap_index(self.focus as i64 - 1, self.fields.len());
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flattens every field's answer into raw submission entries, in
    /// field order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for field in &self.fields {
            field.entries(&mut out);
        }
        out
    }
}

pub(crate) fn apply_text_key(buffer: &mut String, key: &KeyEvent, multiline: bool) -> bool {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        KeyCode::Enter if multiline => {
            buffer.push('\n');
            true
        }
        _ => false,
    }
}

fn wrap_index(next: i64, len: usize) -> usize {
    let len = len as i64;
    (((next % len) + len) % len) as usize
}

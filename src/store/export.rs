use crate::domain::Form;
use crate::submit::AnswerValue;

use super::ResponseRecord;

/// Renders responses as CSV, one column per field of `form` plus a
/// leading submission timestamp. Every cell is quoted; multi-value
/// answers are joined with `"; "`.
pub fn export_csv(form: &Form, records: &[ResponseRecord]) -> String {
    let mut header = vec!["Submitted At".to_string()];
    for (index, field) in form.fields.iter().enumerate() {
        if field.label.is_empty() {
            header.push(format!("Field {}", index + 1));
        } else {
            header.push(field.label.clone());
        }
    }

    let mut lines = vec![csv_line(&header)];
    for record in records {
        let mut row = vec![record.submitted_at.to_rfc3339()];
        for field in &form.fields {
            row.push(answer_cell(record, &field.id));
        }
        lines.push(csv_line(&row));
    }
    lines.join("\n")
}

fn answer_cell(record: &ResponseRecord, field_id: &str) -> String {
    match record.answers.get(field_id) {
        None => String::new(),
        Some(AnswerValue::One(value)) => value.clone(),
        Some(AnswerValue::Many(values)) => values.join("; "),
    }
}

fn csv_line(cells: &[String]) -> String {
    let quoted: Vec<_> = cells
        .iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect();
    quoted.join(",")
}

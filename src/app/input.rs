use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Focusable regions of the builder screen, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderZone {
    Title,
    Description,
    Fields,
    Inspector,
}

#[derive(Debug, Clone, Copy)]
pub enum BuilderCommand {
    AddPaletteEntry(usize),
    SelectDelta(i32),
    MoveSelected(i32),
    RemoveSelected,
    NextZone,
    PrevZone,
    EnterInspector,
    LeaveZone,
    NextAttr,
    PrevAttr,
    Save,
    Quit,
    Edit(KeyEvent),
    None,
}

/// Maps a key press to a builder command. The meaning of plain keys
/// depends on which zone holds focus; chords and Tab work everywhere.
pub fn classify_builder(zone: BuilderZone, key: &KeyEvent) -> BuilderCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => BuilderCommand::Save,
            KeyCode::Char('q') | KeyCode::Char('Q') => BuilderCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => BuilderCommand::Quit,
            KeyCode::Up => BuilderCommand::MoveSelected(-1),
            KeyCode::Down => BuilderCommand::MoveSelected(1),
            _ => BuilderCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab => BuilderCommand::NextZone,
        KeyCode::BackTab => BuilderCommand::PrevZone,
        KeyCode::Esc => BuilderCommand::LeaveZone,
        _ => match zone {
            BuilderZone::Fields => match key.code {
                KeyCode::Up => BuilderCommand::SelectDelta(-1),
                KeyCode::Down => BuilderCommand::SelectDelta(1),
                KeyCode::Delete => BuilderCommand::RemoveSelected,
                KeyCode::Enter => BuilderCommand::EnterInspector,
                KeyCode::Char(ch @ '1'..='8') => {
                    BuilderCommand::AddPaletteEntry(ch as usize - '1' as usize)
                }
                _ => BuilderCommand::None,
            },
            BuilderZone::Inspector => match key.code {
                KeyCode::Up => BuilderCommand::PrevAttr,
                KeyCode::Down => BuilderCommand::NextAttr,
                _ => BuilderCommand::Edit(*key),
            },
            BuilderZone::Title | BuilderZone::Description => BuilderCommand::Edit(*key),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RespondCommand {
    NextField,
    PrevField,
    Submit,
    Quit,
    ResetStatus,
    Edit(KeyEvent),
    None,
}

pub fn classify_respond(key: &KeyEvent) -> RespondCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => RespondCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => RespondCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => RespondCommand::Quit,
            _ => RespondCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => RespondCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => RespondCommand::PrevField,
        KeyCode::Esc => RespondCommand::ResetStatus,
        _ => RespondCommand::Edit(*key),
    }
}

use super::field::FieldKind;

/// Immutable palette entry describing one field kind: the label shown on the
/// palette, the icon used in field cards and the placeholder a fresh field
/// starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeDescriptor {
    pub kind: FieldKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub placeholder: &'static str,
}

/// Palette order of the builder. The index of each entry equals its kind's
/// discriminant, which `descriptor` relies on.
pub static FIELD_TYPES: [FieldTypeDescriptor; 8] = [
    FieldTypeDescriptor {
        kind: FieldKind::Text,
        label: "Text Input",
        icon: "T",
        placeholder: "Short answer text",
    },
    FieldTypeDescriptor {
        kind: FieldKind::LongText,
        label: "Long Text",
        icon: "¶",
        placeholder: "Long answer text",
    },
    FieldTypeDescriptor {
        kind: FieldKind::Email,
        label: "Email",
        icon: "@",
        placeholder: "email@example.com",
    },
    FieldTypeDescriptor {
        kind: FieldKind::Number,
        label: "Number",
        icon: "#",
        placeholder: "0",
    },
    FieldTypeDescriptor {
        kind: FieldKind::Select,
        label: "Dropdown",
        icon: "▼",
        placeholder: "Select an option",
    },
    FieldTypeDescriptor {
        kind: FieldKind::Radio,
        label: "Multiple Choice",
        icon: "○",
        placeholder: "",
    },
    FieldTypeDescriptor {
        kind: FieldKind::Checkbox,
        label: "Checkboxes",
        icon: "☐",
        placeholder: "",
    },
    FieldTypeDescriptor {
        kind: FieldKind::Date,
        label: "Date",
        icon: "📅",
        placeholder: "",
    },
];

pub fn descriptor(kind: FieldKind) -> &'static FieldTypeDescriptor {
    &FIELD_TYPES[kind as usize]
}

//! Field-level editing of a filter draft.

use crate::model::{FilterFields, FilterKind};

/// An input on the create/edit form, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Kind,
    Criteria,
    CaseSensitive,
    AutoReply,
    Active,
}

impl FormField {
    const ORDER: [Self; 7] = [
        Self::Name,
        Self::Description,
        Self::Kind,
        Self::Criteria,
        Self::CaseSensitive,
        Self::AutoReply,
        Self::Active,
    ];

    /// Fields shown for a filter of the given kind.
    ///
    /// The case-sensitivity box is hidden for address filters.
    pub fn visible(kind: FilterKind) -> impl Iterator<Item = Self> {
        Self::ORDER
            .into_iter()
            .filter(move |field| field.is_visible(kind))
    }

    #[must_use]
    pub const fn is_visible(self, kind: FilterKind) -> bool {
        !matches!(self, Self::CaseSensitive) || kind.supports_case_sensitivity()
    }

    #[must_use]
    pub fn next(self, kind: FilterKind) -> Self {
        let fields: Vec<_> = Self::visible(kind).collect();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + 1) % fields.len()]
    }

    #[must_use]
    pub fn prev(self, kind: FilterKind) -> Self {
        let fields: Vec<_> = Self::visible(kind).collect();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + fields.len() - 1) % fields.len()]
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::Description | Self::Criteria)
    }

    #[must_use]
    pub const fn is_checkbox(self) -> bool {
        matches!(self, Self::CaseSensitive | Self::AutoReply | Self::Active)
    }

    #[must_use]
    pub fn label(self, kind: FilterKind) -> &'static str {
        match self {
            Self::Name => "Nombre del filtro",
            Self::Description => "Descripción",
            Self::Kind => "Tipo de filtrado",
            Self::Criteria => kind.criteria_label(),
            Self::CaseSensitive => "Sensible a mayúsculas y minúsculas",
            Self::AutoReply => "Activar respuesta automática",
            Self::Active => "Filtro activo",
        }
    }

    #[must_use]
    pub fn placeholder(self, kind: FilterKind) -> &'static str {
        match self {
            Self::Name => "Ej: Correos de trabajo",
            Self::Description => "Describe qué hace este filtro...",
            Self::Criteria => kind.criteria_placeholder(),
            _ => "",
        }
    }
}

/// A single edit applied to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    /// Flip a check box, or advance the kind selector
    Toggle,
    Next,
    Prev,
}

/// Apply an edit to the draft. Returns `false` when the input does not
/// apply to the field (typing into a check box, for example).
pub fn apply(fields: &mut FilterFields, field: FormField, input: FormInput) -> bool {
    match (field, input) {
        (FormField::Name, FormInput::Char(c)) => fields.name.push(c),
        (FormField::Description, FormInput::Char(c)) => fields.description.push(c),
        (FormField::Criteria, FormInput::Char(c)) => fields.criteria.push(c),
        (FormField::Name, FormInput::Backspace) => {
            fields.name.pop();
        }
        (FormField::Description, FormInput::Backspace) => {
            fields.description.pop();
        }
        (FormField::Criteria, FormInput::Backspace) => {
            fields.criteria.pop();
        }
        (FormField::Kind, FormInput::Toggle | FormInput::Next) => {
            fields.kind = fields.kind.next();
        }
        (FormField::Kind, FormInput::Prev) => fields.kind = fields.kind.prev(),
        (FormField::CaseSensitive, FormInput::Toggle) if fields.kind.supports_case_sensitivity() => {
            fields.case_sensitive = Some(!fields.case_sensitive.unwrap_or(false));
        }
        (FormField::AutoReply, FormInput::Toggle) => fields.auto_reply = !fields.auto_reply,
        (FormField::Active, FormInput::Toggle) => fields.active = !fields.active,
        _ => return false,
    }
    true
}

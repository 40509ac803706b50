//! Filter records and the editable fields they are made of.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a committed filter record.
///
/// Allocated from the wall clock at creation time and bumped past the
/// largest id already in the set, see [`FilterSet::append`](super::FilterSet::append).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(pub u64);

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How incoming mail is matched against a filter's criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Sender address
    #[default]
    Address,
    /// Comma-separated keyword list
    Keyword,
    /// Free text in subject or body
    Subject,
}

impl FilterKind {
    pub const ALL: [Self; 3] = [Self::Address, Self::Keyword, Self::Subject];

    /// Short label used in the filter list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Address => "Dirección",
            Self::Keyword => "Palabra clave",
            Self::Subject => "Asunto",
        }
    }

    /// Label used on the review screens.
    #[must_use]
    pub const fn review_label(self) -> &'static str {
        match self {
            Self::Address => "Dirección de correo",
            Self::Keyword => "Palabra clave",
            Self::Subject => "Asunto/Cuerpo",
        }
    }

    /// Label of the criteria input, which depends on the kind.
    #[must_use]
    pub const fn criteria_label(self) -> &'static str {
        match self {
            Self::Address => "Dirección de correo electrónico",
            Self::Keyword => "Palabras clave (separadas por comas)",
            Self::Subject => "Texto en asunto/cuerpo",
        }
    }

    #[must_use]
    pub const fn criteria_placeholder(self) -> &'static str {
        match self {
            Self::Address => "ejemplo@dominio.com",
            Self::Keyword => "promoción, oferta, descuento",
            Self::Subject => "Texto a buscar...",
        }
    }

    /// Single-character glyph shown next to the kind in the list.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Address => "@",
            Self::Keyword => "#",
            Self::Subject => "¶",
        }
    }

    /// Whether the case-sensitivity flag applies to this kind.
    #[must_use]
    pub const fn supports_case_sensitivity(self) -> bool {
        !matches!(self, Self::Address)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Address => Self::Keyword,
            Self::Keyword => Self::Subject,
            Self::Subject => Self::Address,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Address => Self::Subject,
            Self::Keyword => Self::Address,
            Self::Subject => Self::Keyword,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::Keyword => write!(f, "keyword"),
            Self::Subject => write!(f, "subject"),
        }
    }
}

/// The user-editable part of a filter, used as the draft while composing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFields {
    pub name: String,
    pub description: String,
    pub kind: FilterKind,
    /// Interpretation depends on `kind`: an address, a keyword list or free text.
    pub criteria: String,
    pub active: bool,
    pub auto_reply: bool,
    /// Only meaningful when `kind` is not [`FilterKind::Address`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl Default for FilterFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: FilterKind::Address,
            criteria: String::new(),
            active: true,
            auto_reply: false,
            case_sensitive: Some(false),
        }
    }
}

impl FilterFields {
    /// A draft can move to the review step once it has a name and criteria.
    #[must_use]
    pub fn is_reviewable(&self) -> bool {
        !self.name.is_empty() && !self.criteria.is_empty()
    }

    /// Case sensitivity as it applies to matching, `None` for address filters.
    #[must_use]
    pub fn effective_case_sensitive(&self) -> Option<bool> {
        if self.kind.supports_case_sensitivity() {
            Some(self.case_sensitive.unwrap_or(false))
        } else {
            None
        }
    }

    /// Criteria split on commas, trimmed, with empty entries dropped.
    pub fn criteria_terms(&self) -> impl Iterator<Item = &str> {
        self.criteria
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Copy of the fields with `case_sensitive` cleared for address filters.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.case_sensitive = self.effective_case_sensitive();
        self
    }
}

/// A committed filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRecord {
    pub id: FilterId,
    #[serde(flatten)]
    pub fields: FilterFields,
}

impl FilterRecord {
    #[must_use]
    pub fn new(id: FilterId, fields: FilterFields) -> Self {
        Self {
            id,
            fields: fields.normalized(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        self.fields.kind
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.fields.active
    }
}

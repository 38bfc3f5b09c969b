// src/shared/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit merge semantics for nullable columns)
// ──────────────────────────────────────────────────────────
// - omitted field => Unset (needs #[serde(default)] on the field)
// - null          => Null, clears the stored value
// - value         => Value(v), replaces the stored value
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// `None` keeps the column, `Some(None)` clears it, `Some(Some(v))` sets it.
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

impl PatchField<String> {
    /// An empty or whitespace-only value clears the column.
    pub fn blank_as_null(self) -> Self {
        match self {
            PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
            other => other,
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}

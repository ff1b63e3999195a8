//! Draft records and their field definitions.

use serde::Serialize;

use crate::error::{MedicareError, Result};

/// How a field is entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    /// A value picked from a list supplied by the screen.
    Choice,
    LongText,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// In-progress, unsaved state of a create-type screen.
///
/// Fields are addressed by their form name (e.g. `firstName`). Validation only
/// checks that required fields are non-empty.
pub trait Draft: Clone + Default + Send + Sync + 'static {
    /// Form name used in messages and errors.
    const FORM: &'static str;

    fn fields() -> &'static [FieldSpec];

    fn get(&self, name: &str) -> Option<&str>;

    fn slot_mut(&mut self, name: &str) -> Option<&mut String>;

    fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = self.slot_mut(name).ok_or_else(|| MedicareError::UnknownField {
            form: Self::FORM.to_string(),
            field: name.to_string(),
        })?;
        *slot = value.into();
        Ok(())
    }

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.name == name)
    }

    /// Names of required fields that are still empty, in form order.
    fn missing_required(&self) -> Vec<&'static str> {
        Self::fields()
            .iter()
            .filter(|f| f.required && self.get(f.name).is_none_or(str::is_empty))
            .map(|f| f.name)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MedicareError::validation(Self::FORM, missing))
        }
    }
}

//! Generic resource description.
//!
//! Every backend collection (users, students, teachers, subjects) is
//! described once through [`Resource`]; the list store, the API client and
//! the CRUD screen are all generic over it.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AdminError, AdminResult};

/// Backend-assigned record identifier.
pub type RecordId = u64;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Input widget used for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// Free text coerced to an integer on submit.
    Integer,
}

impl FieldKind {
    /// HTML `type` attribute of the input.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Integer => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        kind: FieldKind,
        placeholder: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            placeholder,
        }
    }
}

/// How a screen edits existing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Table cells of the edited row turn into inputs.
    Inline,
    /// The record is copied into the add/edit dialog.
    Modal,
}

/// Raw form input keyed by [`FieldSpec::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    /// A form with an empty string for every field.
    pub fn blank(fields: &[FieldSpec]) -> Self {
        Self(fields.iter().map(|f| (f.key, String::new())).collect())
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Presence check over every listed field.
    pub fn ensure_complete(&self, fields: &[FieldSpec]) -> AdminResult<()> {
        if fields.iter().any(|f| self.get(f.key).trim().is_empty()) {
            return Err(AdminError::invalid_input(MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }

    /// Trimmed, non-empty text value.
    pub fn text(&self, key: &str) -> AdminResult<String> {
        let value = self.get(key).trim();
        if value.is_empty() {
            return Err(AdminError::invalid_input(MISSING_FIELDS_MESSAGE).in_op_with("form.text", key));
        }
        Ok(value.to_string())
    }

    /// Integer value; the raw input must parse completely.
    pub fn integer<T: FromStr>(&self, key: &str, label: &str) -> AdminResult<T> {
        let raw = self.text(key)?;
        raw.parse::<T>().map_err(|_| {
            AdminError::invalid_input(format!("{} must be a whole number", label))
                .in_op_with("form.integer", key)
        })
    }
}

/// A backend collection rendered by the generic CRUD screen.
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Body sent when creating a record.
    type Draft: Serialize + 'static;

    /// Path segment of the collection, e.g. `"students"`.
    const COLLECTION: &'static str;
    /// Human name used in titles and notifications, e.g. `"Student"`.
    const SINGULAR: &'static str;
    const FIELDS: &'static [FieldSpec];
    const EDIT_MODE: EditMode;

    fn id(&self) -> RecordId;

    /// Current values, as shown in table cells and prefilled in edit forms.
    fn to_form(&self) -> FormValues;

    fn draft_from_form(form: &FormValues) -> AdminResult<Self::Draft>;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Full replacement record for a PUT, built from edited form values.
    fn merge_form(&self, form: &FormValues) -> AdminResult<Self> {
        let draft = Self::draft_from_form(form)?;
        Ok(Self::from_draft(self.id(), draft))
    }

    fn cell(&self, key: &str) -> String {
        self.to_form().get(key).to_string()
    }

    fn collection_path() -> String {
        format!("/{}", Self::COLLECTION)
    }

    fn record_path(id: RecordId) -> String {
        format!("/{}/{}", Self::COLLECTION, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text, ""),
        FieldSpec::new("age", "Age", FieldKind::Integer, ""),
    ];

    #[test]
    fn test_blank_form_has_every_key() {
        let form = FormValues::blank(FIELDS);
        assert_eq!(form.get("name"), "");
        assert_eq!(form.get("age"), "");
        assert_eq!(form.get("unknown"), "");
    }

    #[test]
    fn test_presence_check() {
        let form = FormValues::blank(FIELDS).with("name", "Ann");
        let err = form.ensure_complete(FIELDS).unwrap_err();
        assert_eq!(err.message(), MISSING_FIELDS_MESSAGE);

        let form = form.with("age", "  ");
        assert!(form.ensure_complete(FIELDS).is_err());

        let form = form.with("age", "12");
        assert!(form.ensure_complete(FIELDS).is_ok());
    }

    #[test]
    fn test_integer_coercion() {
        let form = FormValues::default().with("age", " 14 ");
        assert_eq!(form.integer::<u32>("age", "Age").unwrap(), 14);

        let form = FormValues::default().with("age", "14.5");
        let err = form.integer::<u32>("age", "Age").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.message(), "Age must be a whole number");
    }
}

//! Ordered label/value result lists.
//!
//! Every collector produces a [`ResultList`]. Insertion order is display
//! order, and labels may repeat (two WHOIS headers, two `A` runs): nothing is
//! deduplicated or overwritten.

use std::fmt;

use crate::config::ERROR_LABEL;

/// What a field represents when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Ordinary `label: value` data
    Entry,
    /// Section marker; the value is always empty
    Header,
    /// Blank line between sections
    Separator,
    /// Inline error reported in place of data
    Error,
}

/// One labeled field of a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label shown before the colon; empty for separators
    pub label: String,
    /// Value text; empty for headers and separators
    pub value: String,
    /// How the field renders
    pub kind: FieldKind,
}

/// An ordered sequence of labeled fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList {
    fields: Vec<Field>,
}

impl ResultList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    fn push_field(&mut self, label: impl Into<String>, value: impl Into<String>, kind: FieldKind) {
        self.fields.push(Field {
            label: label.into(),
            value: value.into(),
            kind,
        });
    }

    /// Appends a data field.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.push_field(label, value, FieldKind::Entry);
    }

    /// Appends a section header (a label with an empty value).
    pub fn push_header(&mut self, label: impl Into<String>) {
        self.push_field(label, "", FieldKind::Header);
    }

    /// Appends a blank separator line.
    pub fn push_separator(&mut self) {
        self.push_field("", "", FieldKind::Separator);
    }

    /// Appends an error field labeled `Error`.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push_field(ERROR_LABEL, message, FieldKind::Error);
    }

    /// Appends an error field under a caller-chosen label (e.g. a status line).
    pub fn push_error_with_label(&mut self, label: impl Into<String>, message: impl Into<String>) {
        self.push_field(label, message, FieldKind::Error);
    }

    /// Returns the value of the first field carrying `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// Returns true if any field is an inline error.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.kind == FieldKind::Error)
    }

    /// All fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterates over `(label, value)` pairs in display order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str()))
    }

    /// Number of fields, headers and separators included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been pushed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for ResultList {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Extend<Field> for ResultList {
    fn extend<T: IntoIterator<Item = Field>>(&mut self, iter: T) {
        self.fields.extend(iter);
    }
}

/// Uncolored rendering, one field per line.
impl fmt::Display for ResultList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            match field.kind {
                FieldKind::Separator => writeln!(f)?,
                FieldKind::Header => writeln!(f, "{}", field.label)?,
                FieldKind::Entry | FieldKind::Error => {
                    writeln!(f, "{}: {}", field.label, field.value)?
                }
            }
        }
        Ok(())
    }
}

//! Declarative field schema for search panels
//!
//! A [`Schema`] is an ordered list of [`FieldDescriptor`]s. The order is the
//! render order; keys must be unique and match a parameter name the host's
//! query layer understands.

use std::sync::Arc;

/// One selectable choice of a single-select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    /// Value stored in the parameters when this option is chosen
    pub id: &'static str,
    /// Display text (already translated)
    pub label: String,
}

impl FieldOption {
    pub fn new(id: &'static str, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// How a field is edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    /// Radio group; the option at index 0 is the implied default
    SingleSelect(Vec<FieldOption>),
}

impl FieldKind {
    /// Input type name as the host markup knows it
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::SingleSelect(_) => "radio",
        }
    }

    /// Options of a single-select field, empty for free-form inputs
    pub fn options(&self) -> &[FieldOption] {
        match self {
            Self::SingleSelect(options) => options,
            Self::Text | Self::Date => &[],
        }
    }

    pub fn is_free_form(&self) -> bool {
        matches!(self, Self::Text | Self::Date)
    }
}

/// Static declaration of one editable filter parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Parameter key (e.g., "filename")
    pub key: &'static str,
    /// Display label (already translated)
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn text(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn date(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            kind: FieldKind::Date,
        }
    }

    pub fn single_select(
        key: &'static str,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self {
            key,
            label: label.into(),
            kind: FieldKind::SingleSelect(options),
        }
    }

    /// The option shown as selected when no value is stored yet
    pub fn default_option(&self) -> Option<&FieldOption> {
        self.kind.options().first()
    }
}

/// Ordered, immutable list of field descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Build a schema from descriptors in render order.
    ///
    /// Malformed schemas (duplicate keys, option-less single-selects) are
    /// programming errors and only checked in debug builds.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        debug_assert!(
            fields.iter().all(|f| match &f.kind {
                FieldKind::SingleSelect(options) => !options.is_empty(),
                _ => true,
            }),
            "single-select fields need at least one option"
        );
        debug_assert!(
            fields
                .iter()
                .enumerate()
                .all(|(i, f)| fields[..i].iter().all(|prev| prev.key != f.key)),
            "field keys must be unique"
        );
        Self { fields }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap into the shared form handed to panels
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameter keys in render order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

//! Search panel component
//!
//! A [`SearchPanel`] keeps a working copy of the host's parameters (the local
//! form state), renders one control per schema field and pushes every edit
//! back into the host-owned [`SearchParams`].
//!
//! Edits are two-phase: the value is first committed to local state, and only
//! once that commit is complete is the whole local state merged into the
//! parameters object. Observers of the parameters never see a value that the
//! panel has not committed.

use std::sync::Arc;

use filterpane_core::prelude::*;
use filterpane_core::{FieldDescriptor, FieldKind, ParamMap, Schema, SearchParams};

/// Opaque handle the host passes along with `params`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostScope {
    id: String,
}

impl HostScope {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Stateful filter panel bound to a host-owned parameters object
#[derive(Debug)]
pub struct SearchPanel {
    schema: Arc<Schema>,
    params: SearchParams,
    scope: Option<HostScope>,
    /// Local form state; an absent key means "unset"
    state: ParamMap,
}

impl SearchPanel {
    /// Create a panel whose local state is a shallow copy of `params`.
    ///
    /// No validation is done: missing keys render empty or default-selected.
    pub fn new(schema: Arc<Schema>, params: SearchParams, scope: Option<HostScope>) -> Self {
        let state = params.snapshot();
        debug!(
            fields = schema.len(),
            keys = state.len(),
            scope = scope.as_ref().map(HostScope::id),
            "search panel constructed"
        );
        Self {
            schema,
            params,
            scope,
            state,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn scope(&self) -> Option<&HostScope> {
        self.scope.as_ref()
    }

    /// Local form state
    pub fn state(&self) -> &ParamMap {
        &self.state
    }

    /// Locally stored value, `None` when unset
    pub fn value(&self, key: &str) -> Option<&str> {
        self.state.get(key).map(String::as_str)
    }

    /// Apply a user edit.
    ///
    /// Keys outside the schema are accepted and published like any other key
    /// but are never rendered.
    pub fn on_change(&mut self, key: &str, value: impl Into<String>) {
        self.commit(key, value.into());
        self.publish();
    }

    fn commit(&mut self, key: &str, value: String) {
        if !self.schema.contains(key) {
            debug!(key, "storing value for a key outside the panel schema");
        }
        trace!(key, value = %value, "commit");
        self.state.insert(key.to_string(), value);
    }

    /// Merge the whole local state, so host writes to keys the panel holds
    /// are overwritten on the next edit
    fn publish(&self) {
        self.params.merge(&self.state);
        trace!(keys = self.state.len(), "published local state to params");
    }

    /// Project the local state onto the schema
    pub fn render(&self) -> PanelView {
        PanelView {
            fields: self
                .schema
                .iter()
                .map(|field| render_field(field, self.value(field.key)))
                .collect(),
        }
    }
}

/// Whether an option is shown as selected.
///
/// An unset or empty stored value selects the first option. Empty and unset
/// are merged on purpose, so an explicit `""` also falls back to the default.
pub fn is_option_checked(stored: Option<&str>, option_id: &str, index: usize) -> bool {
    match stored {
        Some(value) if !value.is_empty() => value == option_id,
        _ => index == 0,
    }
}

fn render_field(field: &FieldDescriptor, stored: Option<&str>) -> FieldView {
    let control = match &field.kind {
        FieldKind::Text | FieldKind::Date => Control::Input {
            input_type: field.kind.input_type(),
            value: stored.unwrap_or_default().to_string(),
        },
        FieldKind::SingleSelect(options) => Control::Radio {
            choices: options
                .iter()
                .enumerate()
                .map(|(index, option)| RadioChoice {
                    id: option.id,
                    label: option.label.clone(),
                    checked: is_option_checked(stored, option.id, index),
                })
                .collect(),
        },
    };

    FieldView {
        key: field.key,
        label: field.label.clone(),
        control,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendered view
// ─────────────────────────────────────────────────────────────────────────────

/// Rendered panel: one entry per schema field, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelView {
    pub fields: Vec<FieldView>,
}

impl PanelView {
    pub fn field(&self, key: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A labeled control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Parameter key, also the input name
    pub key: &'static str,
    pub label: String,
    pub control: Control,
}

impl FieldView {
    /// Current value of a text/date input
    pub fn input_value(&self) -> Option<&str> {
        match &self.control {
            Control::Input { value, .. } => Some(value),
            Control::Radio { .. } => None,
        }
    }

    /// Ids of every checked radio choice
    pub fn checked_ids(&self) -> Vec<&'static str> {
        match &self.control {
            Control::Radio { choices } => choices
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.id)
                .collect(),
            Control::Input { .. } => Vec::new(),
        }
    }

    /// Index of the first checked radio choice
    pub fn checked_index(&self) -> Option<usize> {
        match &self.control {
            Control::Radio { choices } => choices.iter().position(|c| c.checked),
            Control::Input { .. } => None,
        }
    }
}

/// Form control for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Single input; `input_type` is "text" or "date"
    Input {
        input_type: &'static str,
        value: String,
    },
    /// One choice per option, exclusive
    Radio { choices: Vec<RadioChoice> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioChoice {
    pub id: &'static str,
    pub label: String,
    pub checked: bool,
}

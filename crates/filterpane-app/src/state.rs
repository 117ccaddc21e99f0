//! Application state (Model in TEA pattern)

use filterpane_core::prelude::*;
use filterpane_core::{FieldDescriptor, SearchParams};

use crate::config::Settings;
use crate::domain::SearchDomain;
use crate::host::{Host, Props};
use crate::panel::{HostScope, SearchPanel};

/// Scope id the application hands to its panels
pub const APP_SCOPE: &str = "filterpane";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which field of the panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldFocus {
    pub index: usize,
}

impl FieldFocus {
    /// Focus next field, wrapping around
    pub fn next(&mut self, field_count: usize) {
        if field_count > 0 {
            self.index = (self.index + 1) % field_count;
        }
    }

    /// Focus previous field, wrapping around
    pub fn prev(&mut self, field_count: usize) {
        if field_count > 0 {
            self.index = if self.index == 0 {
                field_count - 1
            } else {
                self.index - 1
            };
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    pub domain: SearchDomain,

    /// Host registry and template cache the panel was created from
    pub host: Host,

    /// The parameters object; the app plays the host and owns it
    pub params: SearchParams,

    pub panel: SearchPanel,

    pub focus: FieldFocus,

    pub phase: AppPhase,
}

impl AppState {
    /// Load the search modules into a host and mount the domain's panel on
    /// `params`.
    pub fn new(settings: Settings, domain: SearchDomain, params: SearchParams) -> Result<Self> {
        let host = Host::with_search_panels(&settings.catalog());
        let panel = host.instantiate(
            domain.component_name(),
            Props::new()
                .params(params.clone())
                .scope(HostScope::new(APP_SCOPE)),
        )?;

        info!(
            panel = domain.name(),
            fields = panel.schema().len(),
            "search panel mounted"
        );

        Ok(Self {
            settings,
            domain,
            host,
            params,
            panel,
            focus: FieldFocus::default(),
            phase: AppPhase::Running,
        })
    }

    pub fn field_count(&self) -> usize {
        self.panel.schema().len()
    }

    /// Descriptor of the focused field, `None` for an empty schema
    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        self.panel.schema().fields().get(self.focus.index)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

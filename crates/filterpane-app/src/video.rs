//! Video search panel: schema and host module
//!
//! The video provider does not take any filter fields yet, so the schema is
//! empty and the panel renders nothing.

use filterpane_core::{Schema, Translate};

use crate::host::{Component, HostModule, PANEL_PROPS};

pub const MODULE_NAME: &str = "anp.talpaVideo";
pub const COMPONENT_NAME: &str = "talpaVideoSearchPanel";
pub const TEMPLATE_KEY: &str = "search-panel-talpa_video.html";

pub fn schema(_tr: &dyn Translate) -> Schema {
    Schema::empty()
}

pub fn module(tr: &dyn Translate) -> HostModule {
    let component = Component::new(COMPONENT_NAME, schema(tr).shared(), PANEL_PROPS);
    let markup = component.companion_markup();
    HostModule::new(MODULE_NAME)
        .component(component)
        .run(move |templates| templates.put(TEMPLATE_KEY, markup))
}

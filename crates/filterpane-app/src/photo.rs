//! Photo search panel: schema and host module

use filterpane_core::{FieldDescriptor, FieldOption, Schema, Translate};

use crate::host::{Component, HostModule, PANEL_PROPS};

pub const MODULE_NAME: &str = "anp.photo";
pub const COMPONENT_NAME: &str = "anpSearchPanel";
pub const TEMPLATE_KEY: &str = "search-panel-anp.html";

/// Parameter keys the photo query layer understands
pub const PARAM_KEYS: [&str; 4] = ["reference", "filename", "firstdate", "orientation"];

/// Orientation choices; "any" comes first and is the default
pub fn orientation_options(tr: &dyn Translate) -> Vec<FieldOption> {
    vec![
        FieldOption::new("0", tr.translate("any")),
        FieldOption::new("1", tr.translate("landscape")),
        FieldOption::new("2", tr.translate("portrait")),
        FieldOption::new("3", tr.translate("square")),
        FieldOption::new("4", tr.translate("panoramic")),
    ]
}

pub fn schema(tr: &dyn Translate) -> Schema {
    Schema::new(vec![
        FieldDescriptor::text("reference", tr.translate("Reference")),
        FieldDescriptor::text("filename", tr.translate("File name")),
        FieldDescriptor::single_select(
            "orientation",
            tr.translate("Orientation"),
            orientation_options(tr),
        ),
        FieldDescriptor::date("firstdate", tr.translate("First date")),
    ])
}

/// Host module registering the photo panel and its companion markup
pub fn module(tr: &dyn Translate) -> HostModule {
    let component = Component::new(COMPONENT_NAME, schema(tr).shared(), PANEL_PROPS);
    let markup = component.companion_markup();
    HostModule::new(MODULE_NAME)
        .component(component)
        .run(move |templates| templates.put(TEMPLATE_KEY, markup))
}

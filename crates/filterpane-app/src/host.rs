//! Host registration shim
//!
//! Wraps panels so a host application can look them up by a stable component
//! name, and keeps their companion markup in a shared template cache.
//!
//! A [`HostModule`] declares components and "run" blocks; loading it into a
//! [`Host`] registers the components first, then runs the blocks against the
//! template cache. The panels themselves behave the same regardless of host.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use filterpane_core::prelude::*;
use filterpane_core::{Schema, SearchParams, Translate};

use crate::panel::{HostScope, SearchPanel};
use crate::{photo, video};

/// Prop names every search panel is bound with
pub const PANEL_PROPS: &[&str] = &["params", "scope"];

/// Values handed to a component at instantiation
#[derive(Debug, Clone, Default)]
pub struct Props {
    params: Option<SearchParams>,
    scope: Option<HostScope>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(mut self, params: SearchParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn scope(mut self, scope: HostScope) -> Self {
        self.scope = Some(scope);
        self
    }
}

/// A panel wrapped for the host registry
#[derive(Debug, Clone)]
pub struct Component {
    name: &'static str,
    schema: Arc<Schema>,
    props: &'static [&'static str],
}

impl Component {
    pub fn new(name: &'static str, schema: Arc<Schema>, props: &'static [&'static str]) -> Self {
        Self {
            name,
            schema,
            props,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn props(&self) -> &'static [&'static str] {
        self.props
    }

    fn binds(&self, prop: &str) -> bool {
        self.props.contains(&prop)
    }

    /// Build a panel from host props. Only declared props are bound;
    /// `params` is required.
    pub fn instantiate(&self, props: Props) -> Result<SearchPanel> {
        let params = match props.params {
            Some(params) if self.binds("params") => params,
            _ => return Err(Error::missing_prop(self.name, "params")),
        };
        let scope = props.scope.filter(|_| self.binds("scope"));
        Ok(SearchPanel::new(Arc::clone(&self.schema), params, scope))
    }

    /// Element name in markup, e.g. `anpSearchPanel` -> `anp-search-panel`
    pub fn element_name(&self) -> String {
        let mut element = String::with_capacity(self.name.len() + 4);
        for ch in self.name.chars() {
            if ch.is_ascii_uppercase() {
                element.push('-');
                element.push(ch.to_ascii_lowercase());
            } else {
                element.push(ch);
            }
        }
        element
    }

    /// Markup fragment that mounts this component with its props
    pub fn companion_markup(&self) -> String {
        let element = self.element_name();
        let attrs: String = self
            .props
            .iter()
            .map(|prop| format!(" {prop}=\"{prop}\""))
            .collect();
        format!("<{element}{attrs}></{element}>")
    }
}

/// Markup fragments keyed by a fixed identifier
#[derive(Debug, Clone, Default)]
pub struct TemplateCache {
    entries: HashMap<String, String>,
}

impl TemplateCache {
    pub fn put(&mut self, key: impl Into<String>, markup: impl Into<String>) {
        let key = key.into();
        if self.entries.insert(key.clone(), markup.into()).is_some() {
            debug!(key = %key, "template replaced");
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Components by name
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<&'static str, Component>,
}

impl ComponentRegistry {
    pub fn register(&mut self, component: Component) {
        if self.components.contains_key(component.name()) {
            warn!(name = component.name(), "component registered twice, keeping the latest");
        }
        self.components.insert(component.name(), component);
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.components.keys().copied().collect()
    }
}

type RunBlock = Box<dyn FnOnce(&mut TemplateCache)>;

/// A named bundle of components and setup blocks
pub struct HostModule {
    name: &'static str,
    components: Vec<Component>,
    run_blocks: Vec<RunBlock>,
}

impl HostModule {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            components: Vec::new(),
            run_blocks: Vec::new(),
        }
    }

    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn run(mut self, block: impl FnOnce(&mut TemplateCache) + 'static) -> Self {
        self.run_blocks.push(Box::new(block));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn component_names(&self) -> Vec<&'static str> {
        self.components.iter().map(Component::name).collect()
    }
}

impl std::fmt::Debug for HostModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostModule")
            .field("name", &self.name)
            .field("components", &self.component_names())
            .field("run_blocks", &self.run_blocks.len())
            .finish()
    }
}

/// Minimal host: a component registry plus a template cache
#[derive(Debug, Default)]
pub struct Host {
    registry: ComponentRegistry,
    templates: TemplateCache,
    modules: Vec<&'static str>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with the photo and video modules loaded
    pub fn with_search_panels(tr: &dyn Translate) -> Self {
        let mut host = Self::new();
        host.load(photo::module(tr));
        host.load(video::module(tr));
        host
    }

    pub fn load(&mut self, module: HostModule) {
        let HostModule {
            name,
            components,
            run_blocks,
        } = module;

        for component in components {
            self.registry.register(component);
        }
        for block in run_blocks {
            block(&mut self.templates);
        }

        info!(module = name, "host module loaded");
        self.modules.push(name);
    }

    pub fn instantiate(&self, name: &str, props: Props) -> Result<SearchPanel> {
        self.registry
            .get(name)
            .ok_or_else(|| Error::unknown_component(name))?
            .instantiate(props)
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn templates(&self) -> &TemplateCache {
        &self.templates
    }

    pub fn modules(&self) -> &[&'static str] {
        &self.modules
    }
}

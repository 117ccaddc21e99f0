//! # filterpane-app - Search Panels and Application State
//!
//! Implements the search filter panels and everything around them:
//! - `panel`: [`SearchPanel`], the stateful panel bound to a host-owned
//!   parameters object, and its rendered [`PanelView`]
//! - `photo` / `video`: field schemas and host modules per search domain
//! - `host`: registration shim (component registry + template cache)
//! - `config`: `.filterpane/config.toml` loading
//! - `script`: `key=value` edit scripts for headless mode
//! - `handler` / `message` / `state`: the TEA update loop used by the
//!   terminal and headless frontends

pub mod config;
pub mod domain;
pub mod handler;
pub mod host;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod photo;
pub mod script;
pub mod state;
pub mod video;

pub use domain::SearchDomain;
pub use handler::{process_message, UpdateResult};
pub use host::{Component, ComponentRegistry, Host, HostModule, Props, TemplateCache};
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{Control, FieldView, HostScope, PanelView, RadioChoice, SearchPanel};
pub use script::{parse_line, parse_script, ScriptCommand};
pub use state::{AppPhase, AppState, FieldFocus};

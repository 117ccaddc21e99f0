//! # filterpane-core - Core Domain Types
//!
//! Foundation crate for filterpane. Provides the field schema, the shared
//! parameters handle, label translation, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Schema (`schema`)
//! - [`Schema`] - Ordered list of field descriptors, render order
//! - [`FieldDescriptor`] - Key, label and kind of one filter field
//! - [`FieldKind`] - Text, Date or SingleSelect (with options)
//!
//! ### Parameters (`params`)
//! - [`SearchParams`] - Shared handle to the host-owned parameters object
//! - [`ParamMap`] - Plain key -> value map used for snapshots and local state
//!
//! ### Translation (`translate`)
//! - [`Translate`] - Label resolver called once per label at schema build time
//! - [`Catalog`] - Config-backed message catalog
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use filterpane_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod params;
pub mod schema;
pub mod translate;

/// Prelude for common imports used throughout all filterpane crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use params::{parse_assignment, ParamMap, SearchParams};
pub use schema::{FieldDescriptor, FieldKind, FieldOption, Schema};
pub use translate::{Catalog, Identity, Translate};

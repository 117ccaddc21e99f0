//! Search domains with a filter panel

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use filterpane_core::Error;

use crate::{photo, video};

/// Which search the panel filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDomain {
    #[default]
    Photo,
    Video,
}

impl SearchDomain {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }

    /// Registry name of the domain's panel component
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::Photo => photo::COMPONENT_NAME,
            Self::Video => video::COMPONENT_NAME,
        }
    }

    /// Template cache key of the panel's companion markup
    pub fn template_key(&self) -> &'static str {
        match self {
            Self::Photo => photo::TEMPLATE_KEY,
            Self::Video => video::TEMPLATE_KEY,
        }
    }
}

impl fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchDomain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            _ => Err(Error::unknown_panel(s)),
        }
    }
}

//! Project types and their significators.

use crate::ephemeris::types::Body;
use serde::Serialize;

/// Catalog entry describing a kind of venture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectType {
    pub key: &'static str,
    /// Houses that rule the matter; not yet used by scoring
    pub houses: &'static [u8],
    pub significators: &'static [Body],
    pub label: &'static str,
}

pub const DEFAULT_PROJECT_KEY: &str = "other";

pub const PROJECT_TYPES: &[ProjectType] = &[
    ProjectType {
        key: "business",
        houses: &[1, 2, 10, 11],
        significators: &[Body::Jupiter, Body::Sun, Body::Mercury],
        label: "Business / Company",
    },
    ProjectType {
        key: "shop",
        houses: &[2, 7, 10],
        significators: &[Body::Mercury, Body::Jupiter, Body::Venus],
        label: "Shop / Commerce",
    },
    ProjectType {
        key: "contract",
        houses: &[7, 3, 9],
        significators: &[Body::Mercury, Body::Jupiter],
        label: "Contract / Agreement",
    },
    ProjectType {
        key: "investment",
        houses: &[2, 5, 8, 11],
        significators: &[Body::Jupiter, Body::Venus],
        label: "Investment",
    },
    ProjectType {
        key: "launch",
        houses: &[1, 10, 11],
        significators: &[Body::Sun, Body::Jupiter, Body::Mars],
        label: "Product Launch",
    },
    ProjectType {
        key: "partnership",
        houses: &[7, 11],
        significators: &[Body::Jupiter, Body::Venus],
        label: "Partnership",
    },
    ProjectType {
        key: "web",
        houses: &[3, 9, 11],
        significators: &[Body::Mercury, Body::Uranus],
        label: "Website / App",
    },
    ProjectType {
        key: DEFAULT_PROJECT_KEY,
        houses: &[1, 10, 11],
        significators: &[Body::Jupiter, Body::Venus],
        label: "General Project",
    },
];

impl ProjectType {
    /// Exact catalog lookup, ignoring case
    pub fn find(key: &str) -> Option<&'static ProjectType> {
        PROJECT_TYPES
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key.trim()))
    }

    /// Catalog lookup that falls back to the general project type
    pub fn lookup(key: &str) -> &'static ProjectType {
        Self::find(key).unwrap_or_else(|| {
            log::debug!("Unknown project type '{}', using '{}'", key, DEFAULT_PROJECT_KEY);
            Self::general()
        })
    }

    pub fn general() -> &'static ProjectType {
        &PROJECT_TYPES[PROJECT_TYPES.len() - 1]
    }
}

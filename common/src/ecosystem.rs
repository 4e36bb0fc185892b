//! Ecosystem-listing selections shared between frontend and backend.

use serde::{Deserialize, Serialize};

/// Which ecosystem collection the user is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EcosystemKind {
    #[default]
    Organisations,
    Policies,
}

impl EcosystemKind {
    pub fn label(self) -> &'static str {
        match self {
            EcosystemKind::Organisations => "Organisations",
            EcosystemKind::Policies => "Policies & Programmes",
        }
    }
}

/// Which custom post types the content source exposes. Probed once per
/// session; everything defaults to the `posts` fallback when the probe
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentTypeSupport {
    pub organisation: bool,
    pub policy: bool,
}

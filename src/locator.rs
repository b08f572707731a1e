//! Package-qualified file locators.
//!
//! Compilation units are addressed by a locator of the form
//! `./<package>/<version>/...`; the first two real segments carry the package
//! identity every produced index entry is stamped with.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use crate::error::UnitError;

/// The package identity a compilation unit is indexed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Extracts the package identity from a `./<package>/<version>/...`
    /// locator. Anything else is rejected.
    pub fn from_locator(locator: &Path) -> Result<Self, UnitError> {
        let bad = || UnitError::BadLocator {
            path: locator.to_path_buf(),
        };

        let mut components = locator.components();
        if !matches!(components.next(), Some(Component::CurDir)) {
            return Err(bad());
        }
        let Some(Component::Normal(name)) = components.next() else {
            return Err(bad());
        };
        let Some(Component::Normal(version)) = components.next() else {
            return Err(bad());
        };
        let (Some(name), Some(version)) = (name.to_str(), version.to_str()) else {
            return Err(bad());
        };

        Ok(Self::new(name, version))
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.version)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    /// License expression as declared; `None` when the manifest had none.
    pub license: Option<String>,
    pub source: LicenseSource,
}

impl Dependency {
    /// The declared expression, or `None` when it is absent or blank.
    pub fn license_expression(&self) -> Option<&str> {
        self.license
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Dependencies that rely on one license, in manifest order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseGroup {
    pub license: String,
    pub dependencies: Vec<String>,
}

/// A dependency left out because no preference covers one of its AND-parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcludedDependency {
    pub name: String,
    pub license: String,
    pub unsatisfied: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LicenseSource {
    Manifest,
    Registry,
    Unknown,
}

impl std::fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseSource::Manifest => write!(f, "manifest"),
            LicenseSource::Registry => write!(f, "registry"),
            LicenseSource::Unknown => write!(f, "unknown"),
        }
    }
}

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{Dependency, LicenseSource};

/// One record of `cargo license --json` output. Extra fields such as
/// `authors`, `repository` or `license_file` are ignored.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    license: Option<String>,
}

/// Read the manifest from `input`, or from stdin when no path is given.
pub fn load_manifest(input: Option<&Path>) -> Result<Vec<Dependency>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open manifest {}", path.display()))?;
            read_manifest(BufReader::new(file))
                .with_context(|| format!("failed to parse manifest {}", path.display()))
        }
        None => read_manifest(io::stdin().lock()).context("failed to parse manifest from stdin"),
    }
}

/// Parse a JSON array of dependency records.
pub fn read_manifest<R: Read>(reader: R) -> Result<Vec<Dependency>> {
    let entries: Vec<ManifestEntry> = serde_json::from_reader(reader)?;

    let deps = entries
        .into_iter()
        .map(|e| {
            let source = if e.license.as_deref().is_some_and(|l| !l.trim().is_empty()) {
                LicenseSource::Manifest
            } else {
                LicenseSource::Unknown
            };
            Dependency {
                name: e.name,
                version: e.version,
                license: e.license,
                source,
            }
        })
        .collect();

    Ok(deps)
}

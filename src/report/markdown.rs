use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::attribution::Attribution;
use crate::error::AttributionError;

pub const PREAMBLE: &str = "This file contains licenses from the upstream software we depend on. \
This file\nMUST be included with all distributions of the software.\n\n\
This file is generated by a script during release.\n\n";

const GROUP_HEADER: &str = "---\n\nThese software packages contain the following license:\n\n";

/// Render the attribution document.
///
/// Groups appear in preference order, each followed by the verbatim text of
/// its license read from `license_dir/<identifier>`. Rendering stops at the
/// first license without a text file.
pub fn render(
    attribution: &Attribution,
    license_dir: &Path,
    link_base: &str,
) -> Result<String, AttributionError> {
    let mut doc = String::from(PREAMBLE);

    for group in &attribution.groups {
        let text = load_license_text(license_dir, &group.license)?;

        doc.push_str(GROUP_HEADER);
        for name in &group.dependencies {
            doc.push_str(&format!("- [{name}]({link_base}{name})\n"));
        }
        doc.push('\n');

        doc.push_str("```\n");
        doc.push_str(&text);
        doc.push_str("\n```\n\n");
    }

    Ok(doc)
}

/// Path of the text file for `license` inside `license_dir`.
fn license_text_path(license_dir: &Path, license: &str) -> PathBuf {
    license_dir.join(license)
}

fn load_license_text(license_dir: &Path, license: &str) -> Result<String, AttributionError> {
    let path = license_text_path(license_dir, license);
    if !path.is_file() {
        return Err(AttributionError::MissingLicenseText { path });
    }
    std::fs::read_to_string(&path)
        .map_err(|source| AttributionError::UnreadableLicenseText { path, source })
}

/// Write a fully rendered document to `path`.
pub fn write(path: &Path, doc: &str) -> Result<()> {
    std::fs::write(path, doc).with_context(|| format!("failed to write {}", path.display()))
}

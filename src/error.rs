use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a run before the attribution document is complete.
#[derive(Error, Debug)]
pub enum AttributionError {
    /// A chosen license has no text file in the license directory.
    #[error("could not find license file at '{}'", .path.display())]
    MissingLicenseText { path: PathBuf },

    /// The license text file exists but could not be read.
    #[error("could not read license file at '{}'", .path.display())]
    UnreadableLicenseText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the command line nor the config file named any license.
    #[error("no license preferences given; pass --licenses or set `attribution.licenses` in the config file")]
    NoPreferences,
}

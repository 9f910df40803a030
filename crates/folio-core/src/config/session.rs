//! Session persistence configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the command-line front end keeps the session between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the JSON session file.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from(".folio/session.json")
}

use std::path::PathBuf;

/// Resolved file locations for a sync run.
///
/// Carried explicitly instead of leaving the defaults buried in argument
/// parsing, so handlers and tests construct runs against arbitrary paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub cargo_path: PathBuf,
    pub init_path: PathBuf,
}

impl SyncOptions {
    #[must_use]
    pub fn new(cargo_path: PathBuf, init_path: PathBuf) -> Self {
        Self {
            cargo_path,
            init_path,
        }
    }
}

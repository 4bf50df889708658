use std::path::PathBuf;

/// Environment variable naming the checkout root in CI runs.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Workspace root advertised by the environment, if any.
///
/// Consulted only as a read-side fallback when the build descriptor is not
/// found at its configured path; it never changes where files are written.
#[must_use]
pub fn workspace_root() -> Option<PathBuf> {
    std::env::var_os(WORKSPACE_ENV).map(PathBuf::from)
}

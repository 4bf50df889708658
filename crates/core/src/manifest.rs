use std::path::Path;

use async_trait::async_trait;

use crate::version::Version;
use crate::write_outcome::WriteOutcome;

/// A file carrying a version assignment that versync keeps in sync.
///
/// Each target format implements this trait with its own substitution rules.
/// `write_version` is infallible by contract: every failure mode is folded
/// into the returned [`WriteOutcome`].
#[async_trait]
pub trait Manifest: std::fmt::Debug + Send + Sync {
    fn path(&self) -> &Path;

    /// Short human-readable name for report lines.
    fn label(&self) -> &'static str;

    async fn write_version(&self, version: &Version) -> WriteOutcome;
}

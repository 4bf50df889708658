use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use tokio::fs::{read_to_string, write};
use versync_core::{Manifest, Reporter, Version, WriteOutcome};
use versync_utils::{list_directory, workspace_root};

/// Fallback when the build descriptor cannot be read.
pub const DEFAULT_VERSION: &str = "0.1.0";

static VERSION_ASSIGN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(version\s*=\s*)["'][^"']*["']"#).expect("hardcoded regex must compile")
});

/// The build descriptor: read `package.version`, rewrite the first
/// `version = "..."` assignment.
#[derive(Debug)]
pub struct CargoManifest {
    path: PathBuf,
}

impl CargoManifest {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current `package.version`, or [`DEFAULT_VERSION`] when the manifest is
    /// missing, unparseable, or lacks the field. Never fails: every problem on
    /// this path is reported as a warning and absorbed.
    pub async fn read_version(&self, reporter: &dyn Reporter) -> String {
        let path = self.resolve_read_path(reporter).await;
        match read_package_version(&path).await {
            Ok(version) => version,
            Err(e) => {
                reporter.warn(&format!(
                    "failed to read version from {}: {e:#}",
                    path.display()
                ));
                reporter.warn(&format!("proceeding with default version {DEFAULT_VERSION}"));
                DEFAULT_VERSION.to_string()
            }
        }
    }

    /// Resolve where to read the manifest from, logging enough to debug a
    /// wrong working directory. Falls back to the CI workspace root when the
    /// configured path does not exist.
    async fn resolve_read_path(&self, reporter: &dyn Reporter) -> PathBuf {
        let absolute = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());
        reporter.info(&format!(
            "looking for build descriptor at {}",
            absolute.display()
        ));
        if let Some(parent) = absolute.parent() {
            reporter.info(&format!("contents of {}:", parent.display()));
            list_directory(parent, reporter).await;
        }
        if absolute.exists() {
            return absolute;
        }

        if let Ok(current_dir) = std::env::current_dir() {
            reporter.warn(&format!(
                "{} not found, current directory is {}",
                self.path.display(),
                current_dir.display()
            ));
        }
        if let Some(root) = workspace_root() {
            let alternative = root.join(&self.path);
            reporter.info(&format!(
                "trying workspace path {}",
                alternative.display()
            ));
            if alternative.exists() {
                return alternative;
            }
            reporter.warn("build descriptor not found at workspace path either");
            reporter.info(&format!("contents of {}:", root.display()));
            list_directory(&root, reporter).await;
        }
        absolute
    }
}

async fn read_package_version(path: &Path) -> Result<String> {
    let raw = read_to_string(path).await?;
    let manifest = toml::from_str::<toml::Value>(&raw)?;
    manifest
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(|version| version.as_str())
        .map(str::to_string)
        .context("package.version not found")
}

#[async_trait]
impl Manifest for CargoManifest {
    fn path(&self) -> &Path {
        &self.path
    }

    fn label(&self) -> &'static str {
        "build descriptor"
    }

    async fn write_version(&self, version: &Version) -> WriteOutcome {
        // Never creates the file; release automation must not conjure a manifest.
        if !self.path.exists() {
            return WriteOutcome::SkippedMissing;
        }
        let content = match read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => return WriteOutcome::Failed(e.to_string()),
        };
        if !VERSION_ASSIGN_PATTERN.is_match(&content) {
            return WriteOutcome::PatternMissed;
        }
        let updated = VERSION_ASSIGN_PATTERN
            .replacen(&content, 1, format!(r#"${{1}}"{version}""#))
            .to_string();
        match write(&self.path, updated).await {
            Ok(()) => WriteOutcome::Updated,
            Err(e) => WriteOutcome::Failed(e.to_string()),
        }
    }
}

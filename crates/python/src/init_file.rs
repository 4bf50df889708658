use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tokio::fs::{create_dir_all, read_to_string, write};
use versync_core::{Manifest, Version, WriteOutcome};

static INIT_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"__version__\s*=\s*["'][^"']*["']"#).expect("hardcoded regex must compile")
});

/// The package initializer: rewrites every `__version__` assignment, or
/// creates a minimal initializer when the file is absent.
#[derive(Debug)]
pub struct PythonInitFile {
    path: PathBuf,
}

impl PythonInitFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Name of the package the initializer belongs to (its parent directory).
    fn package_name(&self) -> String {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "package".to_string())
    }

    async fn create_with_version(&self, version: &Version) -> WriteOutcome {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = create_dir_all(parent).await {
                return WriteOutcome::Failed(e.to_string());
            }
        }
        let content = format!(
            "\"\"\"\n{} package.\n\"\"\"\n\n__version__ = \"{}\"\n",
            self.package_name(),
            version
        );
        match write(&self.path, content).await {
            Ok(()) => WriteOutcome::Created,
            Err(e) => WriteOutcome::Failed(e.to_string()),
        }
    }
}

#[async_trait]
impl Manifest for PythonInitFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn label(&self) -> &'static str {
        "package initializer"
    }

    async fn write_version(&self, version: &Version) -> WriteOutcome {
        if !self.path.exists() {
            return self.create_with_version(version).await;
        }
        let content = match read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => return WriteOutcome::Failed(e.to_string()),
        };
        if !INIT_VERSION_PATTERN.is_match(&content) {
            return WriteOutcome::PatternMissed;
        }
        let updated =
            INIT_VERSION_PATTERN.replace_all(&content, format!("__version__ = \"{version}\""));
        match write(&self.path, updated.as_ref()).await {
            Ok(()) => WriteOutcome::Updated,
            Err(e) => WriteOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_version_rewrites_assignment() {
        let temp_dir = TempDir::new().unwrap();
        let init_py = temp_dir.path().join("__init__.py");
        fs::write(
            &init_py,
            "\"\"\"rs_bpe package.\"\"\"\n\n__version__ = \"1.2.3\"\n",
        )
        .unwrap();

        let init_file = PythonInitFile::new(init_py.clone());
        let outcome = init_file.write_version(&Version::new(1, 2, 4)).await;
        assert_eq!(outcome, WriteOutcome::Updated);

        let content = fs::read_to_string(&init_py).unwrap();
        assert!(content.contains("__version__ = \"1.2.4\""));
        assert!(content.contains("rs_bpe package."));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_write_version_rewrites_all_occurrences() {
        let temp_dir = TempDir::new().unwrap();
        let init_py = temp_dir.path().join("__init__.py");
        fs::write(
            &init_py,
            "__version__ = '0.1.0'\nVERSION = __version__\n__version__   =   \"0.1.0\"\n",
        )
        .unwrap();

        let init_file = PythonInitFile::new(init_py.clone());
        let outcome = init_file.write_version(&Version::new(0, 2, 0)).await;
        assert_eq!(outcome, WriteOutcome::Updated);

        let content = fs::read_to_string(&init_py).unwrap();
        assert_eq!(content.matches("__version__ = \"0.2.0\"").count(), 2);
        assert!(!content.contains("0.1.0"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_write_version_creates_missing_file_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        let init_py = temp_dir.path().join("python").join("rs_bpe").join("__init__.py");

        let init_file = PythonInitFile::new(init_py.clone());
        let outcome = init_file.write_version(&Version::new(0, 2, 0)).await;
        assert_eq!(outcome, WriteOutcome::Created);

        let content = fs::read_to_string(&init_py).unwrap();
        assert_eq!(
            content,
            "\"\"\"\nrs_bpe package.\n\"\"\"\n\n__version__ = \"0.2.0\"\n"
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_write_version_pattern_miss_leaves_file_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let init_py = temp_dir.path().join("__init__.py");
        let original = "\"\"\"no version here.\"\"\"\n";
        fs::write(&init_py, original).unwrap();

        let init_file = PythonInitFile::new(init_py.clone());
        let outcome = init_file.write_version(&Version::new(1, 0, 0)).await;
        assert_eq!(outcome, WriteOutcome::PatternMissed);
        assert_eq!(fs::read_to_string(&init_py).unwrap(), original);

        temp_dir.close().unwrap();
    }
}

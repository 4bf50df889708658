use std::path::Path;

use tokio::fs::read_dir;
use versync_core::Reporter;

/// Emit the entries of `dir` through the reporter, one line per entry.
///
/// Debugging aid for runs inside ephemeral automation environments with
/// uncertain working directories. Purely observational: listing failures are
/// reported as warnings and never affect the caller's outcome.
pub async fn list_directory(dir: &Path, reporter: &dyn Reporter) {
    let mut entries = match read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            reporter.warn(&format!("failed to list {}: {e}", dir.display()));
            return;
        }
    };
    let mut lines = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let kind = match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => "dir",
            _ => "file",
        };
        lines.push(format!(
            "  {} ({kind})",
            entry.file_name().to_string_lossy()
        ));
    }
    // read_dir order is platform-dependent
    lines.sort();
    for line in lines {
        reporter.info(&line);
    }
}

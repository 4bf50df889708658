use std::fmt::Display;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Semantic versioning bump types following semver conventions.
///
/// Determines how the version number increments: major (breaking), minor (features), or patch (fixes).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BumpType {
    /// Breaking changes: increments X.0.0
    Major,
    /// New features, backward-compatible: increments 0.X.0
    Minor,
    /// Bug fixes, backward-compatible: increments 0.0.X
    Patch,
}

impl Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Major => "major".red().bold(),
                Self::Minor => "minor".yellow().bold(),
                Self::Patch => "patch".green().bold(),
            }
        )
    }
}

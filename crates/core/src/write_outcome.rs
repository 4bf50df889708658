use std::fmt::Display;

use colored::Colorize;

/// Result value of a single manifest write.
///
/// Writers absorb their own I/O and pattern failures into this value instead
/// of returning errors, so one target's failure never stops the other from
/// being attempted. The front-end aggregates and reports the outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The version assignment was rewritten in place.
    Updated,
    /// The file did not exist and was created with the version assignment.
    Created,
    /// The file did not exist and this writer never creates it.
    SkippedMissing,
    /// The file exists but no version assignment matched; left unchanged.
    PatternMissed,
    /// An I/O failure occurred; the file may be unchanged.
    Failed(String),
}

impl WriteOutcome {
    /// True when the target now carries the requested version.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Updated | Self::Created)
    }
}

impl Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Updated => write!(f, "{}", "updated".green().bold()),
            Self::Created => write!(f, "{}", "created".green().bold()),
            Self::SkippedMissing => write!(f, "{}", "skipped (file not found)".yellow()),
            Self::PatternMissed => {
                write!(f, "{}", "skipped (no version assignment found)".yellow())
            }
            Self::Failed(error) => write!(f, "{}", format!("failed: {error}").red()),
        }
    }
}

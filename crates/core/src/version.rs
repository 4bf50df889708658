use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::bump_type::BumpType;

/// Error type for version strings that do not match `X.Y.Z`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid version format '{0}', expected X.Y.Z")]
pub struct VersionError(pub String);

/// A semantic version: three non-negative components, ordered
/// lexicographically. The canonical textual form is `major.minor.patch`
/// with no leading zeros and no pre-release or build suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the next version at the given precision, with the lower
    /// components reset to zero.
    #[must_use]
    pub const fn bump(&self, bump_type: BumpType) -> Self {
        match bump_type {
            BumpType::Major => Self::new(self.major + 1, 0, 0),
            BumpType::Minor => Self::new(self.major, self.minor + 1, 0),
            BumpType::Patch => Self::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split('.').collect::<Vec<_>>();
        if parts.len() != 3 {
            return Err(VersionError(s.to_string()));
        }
        let component =
            |part: &str| part.parse::<u64>().map_err(|_| VersionError(s.to_string()));
        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

use crate::domain::bump::BumpType;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;

/// Numeric major.minor.patch triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Coerce a published version string into a numeric triple.
    ///
    /// Accepts plain versions ("1.4.2"), prefixed tags ("v1.4.2") and
    /// pre-release versions ("1.4.2-beta.1") - any pre-release or build
    /// suffix is dropped. Fails if no numeric triple can be extracted;
    /// defaulting here would risk re-publishing an already-used version.
    pub fn coerce(raw: &str) -> Result<Self> {
        let clean = raw.trim().trim_start_matches('v').trim_start_matches('V');

        if let Ok(parsed) = semver::Version::parse(clean) {
            return Ok(Version::new(parsed.major, parsed.minor, parsed.patch));
        }

        // Not strict semver - salvage the first numeric triple if one exists
        if let Ok(re) = Regex::new(r"(\d+)\.(\d+)\.(\d+)") {
            if let Some(captures) = re.captures(clean) {
                let major = captures[1].parse::<u64>().map_err(|_| {
                    ReleaseError::version(format!("Invalid major segment in '{}'", raw))
                })?;
                let minor = captures[2].parse::<u64>().map_err(|_| {
                    ReleaseError::version(format!("Invalid minor segment in '{}'", raw))
                })?;
                let patch = captures[3].parse::<u64>().map_err(|_| {
                    ReleaseError::version(format!("Invalid patch segment in '{}'", raw))
                })?;
                return Ok(Version::new(major, minor, patch));
            }
        }

        Err(ReleaseError::version(format!(
            "Cannot coerce '{}' into major.minor.patch",
            raw
        )))
    }

    /// Increment exactly the segment matching the bump type.
    ///
    /// Lower-precedence segments are NOT reset to zero: 1.4.2 + minor
    /// gives 1.5.2, not 1.5.0. Release lines advance one segment at a
    /// time and keep the others where they were.
    pub fn bump_segment(&self, bump: BumpType) -> Self {
        match bump {
            BumpType::Major => Version::new(self.major + 1, self.minor, self.patch),
            BumpType::Minor => Version::new(self.major, self.minor + 1, self.patch),
            BumpType::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

use regex::Regex;
use std::fmt;

/// Version bump magnitude, ordered by precedence (Major > Minor > Patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpType::Major => write!(f, "major"),
            BumpType::Minor => write!(f, "minor"),
            BumpType::Patch => write!(f, "patch"),
        }
    }
}

/// Classify a single commit subject line.
///
/// Mutually exclusive tests in priority order:
/// - `fix!:` / `feat!:` (breaking marker) -> Major
/// - `feat:` -> Minor
/// - `fix:` -> Patch
///
/// Any other subject contributes nothing to the bump decision.
fn classify_subject(subject: &str) -> Option<BumpType> {
    if let Ok(re) = Regex::new(r"(fix|feat)!:") {
        if re.is_match(subject) {
            return Some(BumpType::Major);
        }
    }

    if let Ok(re) = Regex::new(r"feat:") {
        if re.is_match(subject) {
            return Some(BumpType::Minor);
        }
    }

    if let Ok(re) = Regex::new(r"fix:") {
        if re.is_match(subject) {
            return Some(BumpType::Patch);
        }
    }

    None
}

/// Determine the bump magnitude required by a sequence of commit subjects.
///
/// Scans every subject and takes the highest-precedence match, so the result
/// does not depend on commit order. Defaults to [BumpType::Patch] when the
/// sequence is empty or nothing matches.
pub fn classify_bump(subjects: &[String]) -> BumpType {
    subjects
        .iter()
        .filter_map(|subject| classify_subject(subject))
        .max()
        .unwrap_or(BumpType::Patch)
}

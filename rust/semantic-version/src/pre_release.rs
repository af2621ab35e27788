//! Pre-release identifier validation and the keyword ranking heuristic.
//!
//! Identifiers are compared as a single string, not as dot-separated fields.
//! Two different identifiers are first ranked by the release stage keyword
//! they mention ([`PreReleaseType`]) and only then compared byte-wise.

use std::cmp::Ordering;

use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

// ---------------------------------------------------------------------------
// PreReleaseType
// ---------------------------------------------------------------------------

/// Best-guess release stage of a pre-release identifier, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, IntoStaticStr,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum PreReleaseType {
    /// Planning and very early coding.
    PreAlpha,
    /// Initial feature build.
    Alpha,
    /// Features mostly in place, under test.
    Beta,
    /// Potentially ready to ship.
    RC,
}

impl PreReleaseType {
    /// The rank given to identifiers that mention no known keyword.
    pub const DEFAULT: PreReleaseType = PreReleaseType::PreAlpha;

    /// Lower-cased keyword searched for in identifiers.
    pub fn keyword(self) -> &'static str {
        match self {
            PreReleaseType::PreAlpha => "prealpha",
            PreReleaseType::Alpha => "alpha",
            PreReleaseType::Beta => "beta",
            PreReleaseType::RC => "rc",
        }
    }

    /// Rank an identifier by the first keyword, in declaration order, that it
    /// contains case-insensitively. Falls back to [`PreReleaseType::DEFAULT`].
    pub fn of(identifier: &str) -> PreReleaseType {
        let lowered = identifier.to_ascii_lowercase();
        match PreReleaseType::iter().find(|ty| lowered.contains(ty.keyword())) {
            Some(ty) => ty,
            None => {
                tracing::trace!(identifier, "no stage keyword found, using default rank");
                PreReleaseType::DEFAULT
            }
        }
    }
}

impl std::fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

/// Order two distinct pre-release identifiers: stage rank first, then
/// ordinal string order.
pub(crate) fn compare_identifiers(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    PreReleaseType::of(a)
        .cmp(&PreReleaseType::of(b))
        .then_with(|| a.cmp(b))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Why an identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    MissingSeparator,
    Empty,
    InvalidCharacter(char),
    LeadingPeriod,
    TrailingPeriod,
    TrailingHyphen,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingSeparator => write!(f, "no hyphen between patch and identifier"),
            Violation::Empty => write!(f, "empty identifier"),
            Violation::InvalidCharacter(c) => write!(f, "disallowed character {:?}", c),
            Violation::LeadingPeriod => write!(f, "starts with a period"),
            Violation::TrailingPeriod => write!(f, "ends with a period"),
            Violation::TrailingHyphen => write!(f, "ends with a hyphen"),
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

/// Character class and period placement, shared by both constructors.
/// The empty string passes.
pub(crate) fn check_body(identifier: &str) -> Result<(), Violation> {
    if let Some(c) = identifier.chars().find(|c| !is_identifier_char(*c)) {
        return Err(Violation::InvalidCharacter(c));
    }
    if identifier.starts_with('.') {
        return Err(Violation::LeadingPeriod);
    }
    if identifier.ends_with('.') {
        return Err(Violation::TrailingPeriod);
    }
    Ok(())
}

/// Rules for an identifier that followed the `-` in a version string.
pub(crate) fn check_parsed(identifier: &str) -> Result<(), Violation> {
    if identifier.is_empty() {
        return Err(Violation::Empty);
    }
    check_body(identifier)?;
    if identifier.ends_with('-') {
        return Err(Violation::TrailingHyphen);
    }
    Ok(())
}

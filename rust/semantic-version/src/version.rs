//! The [`SemanticVersion`] value type.
//!
//! A version is built either from a string (`"1.2.3-RC.1"`) or from its
//! numeric components plus an optional pre-release identifier. Once built it
//! never changes; the increment operations hand back a fresh value.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Component, Result, VersionError};
use crate::pre_release::{self, Violation};
use crate::time::VersionTime;

/// Anchored structural pattern. Group 4 is a hyphen-introduced pre-release
/// tail drawn from the identifier character class; group 5 catches a tag
/// glued straight onto the patch number.
const VERSION_PATTERN: &str =
    r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([.A-Za-z0-9-]*)|([A-Za-z].*))?$";

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"));

/// An immutable semantic version: `major.minor.patch[-pre_release]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Option<String>,
}

impl SemanticVersion {
    /// A final release with no pre-release identifier.
    pub const fn release(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Build a version from numeric components and a pre-release identifier.
    ///
    /// An empty or all-whitespace identifier means "no pre-release". A single
    /// leading `-` is stripped, so `"-rc.1"` and `"rc.1"` are equivalent.
    pub fn new(major: u32, minor: u32, patch: u32, pre_release: &str) -> Result<Self> {
        let pre_release = if pre_release.trim().is_empty() {
            None
        } else {
            let stripped = pre_release.strip_prefix('-').unwrap_or(pre_release);
            if let Err(violation) = pre_release::check_body(stripped) {
                return Err(reject_pre_release(pre_release, violation));
            }
            Some(stripped.to_string()).filter(|s| !s.is_empty())
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
        })
    }

    /// Parse a version string of the form `X.Y.Z[-prerelease]`.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = match VERSION_RE.captures(input) {
            Some(caps) => caps,
            None => return Err(reject_version(input, "does not match X.Y.Z[-prerelease]")),
        };

        let component = |i: usize| -> Result<u32> {
            caps[i]
                .parse::<u32>()
                .map_err(|_| reject_version(input, "component does not fit in 32 bits"))
        };
        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;

        if caps.get(5).is_some() {
            return Err(reject_pre_release(input, Violation::MissingSeparator));
        }

        let pre_release = match caps.get(4) {
            Some(m) => {
                let identifier = m.as_str();
                if let Err(violation) = pre_release::check_parsed(identifier) {
                    return Err(reject_pre_release(input, violation));
                }
                Some(identifier.to_string())
            }
            None => None,
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
        })
    }

    /// Major version number (X in X.Y.Z).
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor version number (Y in X.Y.Z).
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch version number (Z in X.Y.Z).
    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// The pre-release identifier without its leading hyphen, if any.
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// Whether a pre-release identifier is present.
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    // -----------------------------------------------------------------------
    // Increments
    // -----------------------------------------------------------------------

    /// Next major version: `X+1.0.0`.
    ///
    /// The pre-release identifier is carried over only when
    /// `keep_pre_release` is set. Fails if the major number is `u32::MAX`.
    pub fn increment_major(&self, keep_pre_release: bool) -> Result<Self> {
        let major = bump(self.major, Component::Major)?;
        Ok(self.derive(major, 0, 0, keep_pre_release))
    }

    /// Next minor version: `X.Y+1.0`.
    pub fn increment_minor(&self, keep_pre_release: bool) -> Result<Self> {
        let minor = bump(self.minor, Component::Minor)?;
        Ok(self.derive(self.major, minor, 0, keep_pre_release))
    }

    /// Next patch version: `X.Y.Z+1`.
    pub fn increment_patch(&self, keep_pre_release: bool) -> Result<Self> {
        let patch = bump(self.patch, Component::Patch)?;
        Ok(self.derive(self.major, self.minor, patch, keep_pre_release))
    }

    fn derive(&self, major: u32, minor: u32, patch: u32, keep_pre_release: bool) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: if keep_pre_release {
                self.pre_release.clone()
            } else {
                None
            },
        }
    }

    // -----------------------------------------------------------------------
    // Comparison
    // -----------------------------------------------------------------------

    /// Where `self` sits relative to `other`.
    pub fn compare_to(&self, other: &SemanticVersion) -> VersionTime {
        self.cmp(other).into()
    }

    /// Compare against a dynamically typed operand.
    ///
    /// Pass the value itself (`&*boxed`), not a reference to its box: a
    /// `&Box<dyn Any>` is a different type and is rejected.
    pub fn compare_any(&self, other: &dyn Any) -> Result<VersionTime> {
        match other.downcast_ref::<SemanticVersion>() {
            Some(other) => Ok(self.compare_to(other)),
            None => {
                tracing::debug!(version = %self, "comparison operand is not a SemanticVersion");
                Err(VersionError::TypeMismatch)
            }
        }
    }
}

fn bump(value: u32, component: Component) -> Result<u32> {
    value
        .checked_add(1)
        .ok_or(VersionError::ComponentOverflow { component })
}

fn reject_version(input: &str, reason: &str) -> VersionError {
    tracing::debug!(input, reason, "rejected version string");
    VersionError::VersionFormat {
        input: input.to_string(),
    }
}

fn reject_pre_release(input: &str, violation: Violation) -> VersionError {
    tracing::debug!(input, reason = %violation, "rejected pre-release identifier");
    VersionError::PreReleaseFormat {
        input: input.to_string(),
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.minor.cmp(&other.minor) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.patch.cmp(&other.patch) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // A pre-release comes before the final release it leads up to
        match (&self.pre_release, &other.pre_release) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => pre_release::compare_identifiers(a, b),
        }
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemanticVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = SemanticVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a version string of the form X.Y.Z[-prerelease]")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SemanticVersion::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

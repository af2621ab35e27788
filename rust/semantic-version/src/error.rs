//! Error type shared by every fallible version operation.

use thiserror::Error;

/// Diagnostic for a string whose `major.minor.patch` core is malformed.
pub const INVALID_VERSION_STRING_FORMAT: &str = "Invalid version string. Versions must be in the format X.Y.Z[-prerelease], where X, Y and Z are non-negative integers.";

/// Diagnostic for a pre-release identifier that breaks the identifier grammar.
pub const INVALID_PRE_RELEASE_STRING_FORMAT: &str = "Invalid pre-release identifier. Identifiers may only contain ASCII letters, digits, hyphens and periods, must not start or end with a period, and must follow the patch number after a single hyphen.";

/// Diagnostic for comparing a version against a value of another type.
pub const TYPE_MISMATCH: &str = "Comparison operand must be a SemanticVersion.";

/// Which numeric component of a version an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The `X.Y.Z` core did not match, or a component does not fit in a `u32`.
    #[error("{msg} (got `{input}`)", msg = INVALID_VERSION_STRING_FORMAT)]
    VersionFormat { input: String },

    /// The core was well formed but the pre-release identifier was not.
    #[error("{msg} (got `{input}`)", msg = INVALID_PRE_RELEASE_STRING_FORMAT)]
    PreReleaseFormat { input: String },

    /// A polymorphic comparison was handed something other than a version.
    #[error("{}", TYPE_MISMATCH)]
    TypeMismatch,

    /// An increment would carry a component past `u32::MAX`.
    #[error("cannot increment {component} version: already at {max}", max = u32::MAX)]
    ComponentOverflow { component: Component },
}

pub type Result<T> = std::result::Result<T, VersionError>;

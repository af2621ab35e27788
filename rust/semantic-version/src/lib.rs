//! Semantic Version
//!
//! An immutable `major.minor.patch[-pre_release]` value type with string and
//! numeric constructors, pure increment operations, and a total ordering that
//! ranks pre-release identifiers by the release stage they name.
//!
//! ```
//! use semantic_version::{SemanticVersion, VersionTime};
//!
//! let rc: SemanticVersion = "1.0.0-RC.1".parse().unwrap();
//! let alpha = SemanticVersion::new(1, 0, 0, "-alpha").unwrap();
//! assert_eq!(alpha.compare_to(&rc), VersionTime::Earlier);
//! assert!(rc < SemanticVersion::release(1, 0, 0));
//! assert_eq!(rc.increment_minor(false).unwrap().to_string(), "1.1.0");
//! ```

pub mod error;
pub mod pre_release;
pub mod time;
pub mod version;

pub use error::{
    Component, Result, VersionError, INVALID_PRE_RELEASE_STRING_FORMAT,
    INVALID_VERSION_STRING_FORMAT, TYPE_MISMATCH,
};
pub use pre_release::PreReleaseType;
pub use time::VersionTime;
pub use version::SemanticVersion;

//! Three-valued ordering result between two versions.

use std::cmp::Ordering;
use std::fmt;

/// Where one version sits relative to another.
///
/// The discriminants mirror the conventional `-1 / 0 / 1` comparison encoding,
/// so `VersionTime::Earlier as i32 == -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum VersionTime {
    /// The receiver is an earlier version than the operand.
    Earlier = -1,
    /// Both versions are the same.
    Same = 0,
    /// The receiver is a later version than the operand.
    Later = 1,
}

impl VersionTime {
    /// The `-1 / 0 / 1` encoding of this result.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// The result seen from the other operand's side.
    pub const fn reverse(self) -> Self {
        match self {
            VersionTime::Earlier => VersionTime::Later,
            VersionTime::Same => VersionTime::Same,
            VersionTime::Later => VersionTime::Earlier,
        }
    }
}

impl From<Ordering> for VersionTime {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => VersionTime::Earlier,
            Ordering::Equal => VersionTime::Same,
            Ordering::Greater => VersionTime::Later,
        }
    }
}

impl From<VersionTime> for Ordering {
    fn from(time: VersionTime) -> Self {
        match time {
            VersionTime::Earlier => Ordering::Less,
            VersionTime::Same => Ordering::Equal,
            VersionTime::Later => Ordering::Greater,
        }
    }
}

impl From<VersionTime> for i32 {
    fn from(time: VersionTime) -> Self {
        time.as_i32()
    }
}

impl TryFrom<i32> for VersionTime {
    type Error = i32;

    /// Accepts only `-1`, `0` and `1`; any other value is handed back.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(VersionTime::Earlier),
            0 => Ok(VersionTime::Same),
            1 => Ok(VersionTime::Later),
            other => Err(other),
        }
    }
}

impl fmt::Display for VersionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VersionTime::Earlier => "earlier",
            VersionTime::Same => "same",
            VersionTime::Later => "later",
        };
        f.write_str(s)
    }
}

use serde::{Deserialize, Serialize};

/// A position in alignment space.
///
/// `major` is the 0-based reference position; `minor > 0` marks the n-th base
/// inserted after that reference position. Ordering is lexicographic on
/// `(major, minor)`, which is the order samples store their positions in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub major: u64,
    pub minor: u64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Whether this position lies on the reference rather than in an insertion
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        self.minor == 0
    }

    /// Check if `next` can directly follow this coordinate with nothing in between.
    ///
    /// Either the next inserted base at the same major position, or the next
    /// reference position.
    #[must_use]
    pub fn is_followed_by(&self, next: &Self) -> bool {
        (next.major == self.major && next.minor == self.minor + 1)
            || (next.major == self.major + 1 && next.minor == 0)
    }
}

/// Renders the 1-based boundary string used in contig names, e.g. `15.0`
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major + 1, self.minor)
    }
}

impl From<(u64, u64)> for Coordinate {
    fn from((major, minor): (u64, u64)) -> Self {
        Self::new(major, minor)
    }
}

use std::fmt;
use serde::Serialize;

/// Letter grade derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    A,
    B,
    C,
    D,
}

impl Rank {
    /// Map a score onto its grade band.
    ///
    /// Total over every integer: anything above the top band is `A` and
    /// anything below the pass mark is `D`.
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        match score {
            90.. => Rank::A,
            75..=89 => Rank::B,
            60..=74 => Rank::C,
            _ => Rank::D,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        *self == Rank::A
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

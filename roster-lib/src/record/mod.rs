use std::fmt;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, warn};
use crate::rank::Rank;
use crate::validation::{validate_score, ValidationError};

/// A named score holder.
///
/// The identifier is fixed at construction and only exposed through
/// [`Record::identifier`]. The score changes only through
/// [`Record::set_score`], which keeps it inside the accepted range. The rank
/// has no storage of its own and is derived from the score on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    identifier: String,
    score: i32,
}

impl Record {
    /// Create a record, applying the same range check as [`Record::set_score`]
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `score` is outside `0..=100`.
    pub fn new(identifier: impl Into<String>, score: i32) -> Result<Self, ValidationError> {
        let score = validate_score(score)?;
        Ok(Record {
            identifier: identifier.into(),
            score,
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Replace the score
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `value` is outside `0..=100`; the
    /// previous score is kept.
    pub fn set_score(&mut self, value: i32) -> Result<(), ValidationError> {
        match validate_score(value) {
            Ok(score) => {
                debug!(identifier = %self.identifier, from = self.score, to = score, "score updated");
                self.score = score;
                Ok(())
            }
            Err(err) => {
                warn!(identifier = %self.identifier, rejected = value, "score rejected");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::from_score(self.score)
    }

    /// Human-readable form, for display only
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record(identifier='{}', score={}, rank='{}')",
            self.identifier,
            self.score,
            self.rank()
        )
    }
}

// Snapshot including the derived rank, computed at serialization time.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 3)?;
        state.serialize_field("identifier", &self.identifier)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("rank", &self.rank())?;
        state.end()
    }
}

/// True iff the record holds a top-band rank
#[must_use]
pub fn is_topper(record: &Record) -> bool {
    record.rank().is_top()
}

//! Core logic for partitioning word lists into letter-pattern families.
//!
//! A *family* groups every word whose occurrences of a chosen letter sit at
//! the same positions. The grouping key is the [`signature`]: a string the
//! same length as the word holding the letter where the word holds it and a
//! placeholder everywhere else. The [`Registry`] builds families from a word
//! source in one pass and answers lookup and largest-family queries; each
//! [`Family`] supports snapshotting and uniform random sampling of its words.
//!
//! The registry borrows the words it partitions. Word content is owned by
//! the caller for the registry's whole lifetime and is never copied into a
//! family, only referenced.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod family;
pub mod registry;
pub mod signature;
pub mod wordlist;

pub use error::FamilyError;
pub use family::Family;
pub use registry::Registry;
pub use signature::{signature, PLACEHOLDER};

/// Default number of word slots a family gains per growth step.
pub const DEFAULT_INCREMENT: usize = 4;

/// Configuration fixed once before any family is created.
///
/// The growth increment is the exact number of word slots a family is
/// allocated at creation and gains each time its store fills. Growth is
/// strictly by this increment, never geometric, so a full store of `n` words
/// always grows to capacity `n + increment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFamilyConfig")]
pub struct FamilyConfig {
    growth_increment: usize,
}

/// Unvalidated shape accepted on deserialization; converted through
/// [`FamilyConfig::new`] so a zero increment is rejected there too.
#[derive(Deserialize)]
struct RawFamilyConfig {
    growth_increment: usize,
}

impl TryFrom<RawFamilyConfig> for FamilyConfig {
    type Error = FamilyError;

    fn try_from(raw: RawFamilyConfig) -> Result<Self, FamilyError> {
        Self::new(raw.growth_increment)
    }
}

impl FamilyConfig {
    /// Build a configuration with the given growth increment.
    ///
    /// A zero increment is rejected: a full family could never grow.
    pub fn new(growth_increment: usize) -> Result<Self, FamilyError> {
        if growth_increment == 0 {
            return Err(FamilyError::Config(
                "growth increment must be nonzero".into(),
            ));
        }
        Ok(Self { growth_increment })
    }

    /// Number of slots added per growth step.
    pub fn growth_increment(&self) -> usize {
        self.growth_increment
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            growth_increment: DEFAULT_INCREMENT,
        }
    }
}

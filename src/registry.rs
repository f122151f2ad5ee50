//! The registry: an insertion-ordered collection of families built in one
//! pass over a word source.

use crate::{signature, Family, FamilyConfig, FamilyError};

/// All families produced by partitioning one word source with one letter.
///
/// Families sit in first-seen signature order and signatures are unique
/// within the registry. The registry is mutated only during
/// [`generate`](Registry::generate) and read-only afterwards; dropping it
/// releases family storage but never the referenced word content.
#[derive(Debug)]
pub struct Registry<'a> {
    families: Vec<Family<'a>>,
}

impl<'a> Registry<'a> {
    /// Partition `words` by their signatures for `letter`.
    ///
    /// Words are processed in source order. The first word to produce a new
    /// signature creates that family; every later word with the same
    /// signature is appended to it. An empty source yields an empty
    /// registry, not an error.
    pub fn generate<I>(
        words: I,
        letter: u8,
        config: &FamilyConfig,
    ) -> Result<Self, FamilyError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut families: Vec<Family<'a>> = Vec::new();
        for word in words {
            let sig = signature(word, letter);
            // Families stay few relative to vocabulary, so a linear scan in
            // insertion order is the lookup.
            let idx = match families.iter().position(|f| f.signature() == sig) {
                Some(idx) => idx,
                None => {
                    families.push(Family::new(sig, config.growth_increment())?);
                    families.len() - 1
                }
            };
            families[idx].push(word)?;
        }
        Ok(Self { families })
    }

    /// Find the family with signature `sig`, if any word produced it.
    pub fn find(&self, sig: &str) -> Option<&Family<'a>> {
        self.families.iter().find(|f| f.signature() == sig)
    }

    /// The family holding the most words, first-seen winning ties.
    ///
    /// `None` only when the registry is empty.
    pub fn biggest(&self) -> Option<&Family<'a>> {
        self.families
            .iter()
            .reduce(|best, f| if f.len() > best.len() { f } else { best })
    }

    /// Iterate over families in first-seen signature order.
    pub fn iter(&self) -> impl Iterator<Item = &Family<'a>> {
        self.families.iter()
    }

    /// Number of distinct families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl<'a, 'r> IntoIterator for &'r Registry<'a> {
    type Item = &'r Family<'a>;
    type IntoIter = std::slice::Iter<'r, Family<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}

//! A family: one signature plus the references of every word that produced it.

use rand::Rng;

use crate::FamilyError;

/// A group of word references sharing one signature.
///
/// The words themselves are owned by the word source the registry was built
/// from; a family only stores `&str` references into it. The reference store
/// grows by a fixed increment configured at creation, never geometrically,
/// and [`capacity`](Family::capacity) reports exactly the allocated slot
/// count. Slots past the current length are cleared to `None`.
#[derive(Debug, Clone)]
pub struct Family<'a> {
    signature: String,
    slots: Vec<Option<&'a str>>,
    len: usize,
    increment: usize,
}

impl<'a> Family<'a> {
    /// Create an empty family for `signature`, pre-sized to one increment.
    ///
    /// A zero increment is rejected: a full family could never grow.
    pub fn new(signature: String, increment: usize) -> Result<Self, FamilyError> {
        if increment == 0 {
            return Err(FamilyError::Config(
                "growth increment must be nonzero".into(),
            ));
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(increment)
            .map_err(|_| FamilyError::Allocation(increment))?;
        slots.resize(increment, None);
        Ok(Self {
            signature,
            slots,
            len: 0,
            increment,
        })
    }

    /// The partition key. Equal in length to every word held.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Number of word references currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slot count, always >= [`len`](Family::len). After a full
    /// store grows, this is exactly the previous length plus the increment.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append a word reference at the next free slot, growing the store by
    /// one increment first if it is full.
    ///
    /// Growth preserves the order of everything appended so far. Allocation
    /// exhaustion surfaces as [`FamilyError::Allocation`].
    pub fn push(&mut self, word: &'a str) -> Result<(), FamilyError> {
        if self.len == self.slots.len() {
            self.slots
                .try_reserve_exact(self.increment)
                .map_err(|_| FamilyError::Allocation(self.increment))?;
            // New slots start cleared, same as at creation.
            self.slots.resize(self.len + self.increment, None);
        }
        self.slots[self.len] = Some(word);
        self.len += 1;
        Ok(())
    }

    /// Iterate over the held word references in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.slots[..self.len].iter().copied().flatten()
    }

    /// Copy the current word references into an independently owned vector,
    /// sized exactly to the word count.
    ///
    /// The snapshot shares no storage with the family: dropping or mutating
    /// it never affects later queries on the family itself.
    pub fn snapshot(&self) -> Vec<&'a str> {
        self.words().collect()
    }

    /// Draw one word uniformly at random using the supplied source.
    ///
    /// Sampling an empty family is an error, not undefined behavior.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a str, FamilyError> {
        if self.len == 0 {
            return Err(FamilyError::EmptyFamily);
        }
        let idx = rng.gen_range(0..self.len);
        match self.slots.get(idx).copied().flatten() {
            Some(word) => Ok(word),
            None => Err(FamilyError::EmptyFamily),
        }
    }

    /// Draw one word uniformly at random from the process-wide source.
    pub fn random_word(&self) -> Result<&'a str, FamilyError> {
        self.sample(&mut rand::thread_rng())
    }
}

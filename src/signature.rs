//! Signature derivation: the partition key for word families.

/// Placeholder written at every position not holding the chosen letter.
pub const PLACEHOLDER: u8 = b'_';

/// Return the signature of `word` for `letter`.
///
/// The signature has one character per byte of `word`: the letter itself
/// where the word holds it, [`PLACEHOLDER`] everywhere else. Comparison is
/// single-byte equality, so `letter` is expected to be ASCII; a non-ASCII
/// letter never matches and yields an all-placeholder signature. An empty
/// word yields an empty signature.
///
/// Two words share a signature exactly when the chosen letter sits at the
/// same positions in both; sharing a signature never requires equal words.
pub fn signature(word: &str, letter: u8) -> String {
    word.bytes()
        .map(|b| {
            if b == letter && b.is_ascii() {
                b as char
            } else {
                PLACEHOLDER as char
            }
        })
        .collect()
}

use proptest::prelude::*;
use wordfam::{signature, FamilyConfig, Registry, PLACEHOLDER};

proptest! {
    #[test]
    fn signature_length_matches_word(word in "[a-z]{0,16}", letter in b'a'..=b'z') {
        let sig = signature(&word, letter);
        prop_assert_eq!(sig.len(), word.len());
    }

    #[test]
    fn positions_hold_letter_iff_word_does(word in "[a-z]{0,16}", letter in b'a'..=b'z') {
        let sig = signature(&word, letter);
        for (w, s) in word.bytes().zip(sig.bytes()) {
            if w == letter {
                prop_assert_eq!(s, letter);
            } else {
                prop_assert_eq!(s, PLACEHOLDER);
            }
        }
    }

    #[test]
    fn every_word_counted_once(
        words in proptest::collection::vec("[a-z]{1,8}", 0..40),
        letter in b'a'..=b'z',
    ) {
        let reg = Registry::generate(
            words.iter().map(String::as_str),
            letter,
            &FamilyConfig::default(),
        ).unwrap();
        let total: usize = reg.iter().map(|f| f.len()).sum();
        prop_assert_eq!(total, words.len());

        for fam in reg.iter() {
            for word in fam.words() {
                prop_assert_eq!(signature(word, letter), fam.signature());
            }
        }
    }

    #[test]
    fn biggest_is_maximal(
        words in proptest::collection::vec("[a-z]{1,6}", 1..40),
        letter in b'a'..=b'z',
    ) {
        let reg = Registry::generate(
            words.iter().map(String::as_str),
            letter,
            &FamilyConfig::default(),
        ).unwrap();
        let biggest = reg.biggest().unwrap();
        prop_assert!(reg.iter().all(|f| f.len() <= biggest.len()));
    }
}

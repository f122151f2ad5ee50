use wordfam::{Family, FamilyConfig, FamilyError, Registry};

#[test]
fn growth_preserves_insertion_order() {
    // 2 x increment + 1 pushes forces two growth steps.
    let increment = 4;
    let words: Vec<String> = (0..(2 * increment + 1))
        .map(|i| format!("word{i:02}"))
        .collect();

    let mut fam = Family::new("______".into(), increment).unwrap();
    for word in &words {
        fam.push(word).unwrap();
    }

    let held: Vec<&str> = fam.words().collect();
    let expected: Vec<&str> = words.iter().map(String::as_str).collect();
    assert_eq!(held, expected);
    assert_eq!(fam.len(), 2 * increment + 1);
}

#[test]
fn capacity_grows_by_exactly_one_increment() {
    let increment = 3;
    let mut fam = Family::new("_".into(), increment).unwrap();
    assert_eq!(fam.capacity(), increment);

    for i in 0..increment {
        fam.push("a").unwrap();
        assert_eq!(fam.capacity(), increment, "push {i} should not grow");
    }
    fam.push("a").unwrap();
    assert_eq!(fam.capacity(), 2 * increment);
    assert_eq!(fam.len(), increment + 1);
}

#[test]
fn zero_increment_never_reaches_a_push() {
    // A zero-increment family could never grow, so construction must fail
    // before any push can run off the end of a full store.
    assert!(matches!(
        Family::new("___".into(), 0),
        Err(FamilyError::Config(_))
    ));
}

#[test]
fn increment_one_still_collects_everything() {
    let words: Vec<String> = (0..9).map(|i| format!("w{i}")).collect();
    let config = FamilyConfig::new(1).unwrap();
    let reg = Registry::generate(words.iter().map(String::as_str), b'w', &config).unwrap();
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.biggest().unwrap().len(), 9);
}

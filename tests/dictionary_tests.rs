use wordgrid::{load_dictionary, Dictionary, DictionaryError};

#[test]
fn test_contains_exact_match() {
    let dict = Dictionary::from_words(["CAT", "CATS", "ACT"]).unwrap();
    assert!(dict.contains("CAT"));
    assert!(dict.contains("CATS"));
    assert!(dict.contains("ACT"));
    assert!(!dict.contains("CA"));
    assert!(!dict.contains("CATSS"));
    assert!(!dict.contains("DOG"));
}

#[test]
fn test_contains_is_case_normalized() {
    let dict = Dictionary::from_words(["cat"]).unwrap();
    assert!(dict.contains("CAT"));
    assert!(dict.contains("cat"));
    assert!(dict.contains("cAt"));
}

#[test]
fn test_is_prefix() {
    let dict = Dictionary::from_words(["CATS"]).unwrap();
    assert!(dict.is_prefix("C"));
    assert!(dict.is_prefix("CA"));
    assert!(dict.is_prefix("CAT"));
    assert!(dict.is_prefix("CATS"));
    assert!(!dict.is_prefix("CATSS"));
    assert!(!dict.is_prefix("X"));
}

#[test]
fn test_prefix_is_not_membership() {
    let dict = Dictionary::from_words(["CATS"]).unwrap();
    assert!(dict.is_prefix("CAT"));
    assert!(!dict.contains("CAT"));
}

#[test]
fn test_len_deduplicates() {
    let dict = Dictionary::from_words(["CAT", "cat", "CAT"]).unwrap();
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_unplayable_lengths_are_skipped() {
    let dict = Dictionary::from_words(["at", "cat", "extraordinarily"]).unwrap();
    assert_eq!(dict.len(), 1);
    assert!(!dict.contains("AT"));
    assert!(dict.contains("CAT"));
}

#[test]
fn test_empty_source_is_an_error() {
    let words: [&str; 0] = [];
    let err = Dictionary::from_words(words).unwrap_err();
    assert_eq!(err, DictionaryError::Empty);

    // Everything filtered out by length also counts as empty.
    let err = Dictionary::from_words(["at", "on"]).unwrap_err();
    assert_eq!(err, DictionaryError::Empty);
}

#[test]
fn test_non_alphabetic_word_is_an_error() {
    let err = Dictionary::from_words(["don't"]).unwrap_err();
    assert_eq!(err, DictionaryError::InvalidWord("don't".to_string()));
}

#[test]
fn test_embedded_dictionary_loads() {
    let dict = load_dictionary().unwrap();
    assert!(dict.len() > 1000);
    assert!(dict.contains("CAT"));
    assert!(dict.contains("WORD"));
    assert!(dict.is_prefix("WOR"));
}

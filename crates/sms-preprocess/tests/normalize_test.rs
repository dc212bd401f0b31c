use sms_preprocess::Normalizer;

#[test]
fn test_spam_message_normalization() {
    let normalizer = Normalizer::english().expect("normalizer");
    let tokens =
        normalizer.tokens("WINNER!! You have been selected to receive a $1000 prize, call now!");

    for expected in ["winner", "select", "receiv", "1000", "prize", "call"] {
        assert!(tokens.iter().any(|t| t == expected), "missing {}", expected);
    }
    for dropped in ["have", "been", "to", "you", "a", "!!", "!", "$", ","] {
        assert!(!tokens.iter().any(|t| t == dropped), "kept {}", dropped);
    }
}

#[test]
fn test_ham_message_normalization() {
    let normalizer = Normalizer::english().expect("normalizer");
    assert_eq!(
        normalizer.normalize("Hey, are we still meeting for lunch tomorrow?"),
        "hey still meet lunch tomorrow"
    );
}

#[test]
fn test_sentence_boundaries_release_trailing_periods() {
    let normalizer = Normalizer::english().expect("normalizer");
    assert_eq!(
        normalizer.normalize("Claim your reward. Reply STOP to opt out."),
        "claim reward repli stop opt"
    );
}

#[test]
fn test_normalizer_shared_across_threads() {
    let normalizer = std::sync::Arc::new(Normalizer::english().expect("normalizer"));
    let expected = normalizer.normalize("Free entry to win cash prizes");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let normalizer = normalizer.clone();
            std::thread::spawn(move || normalizer.normalize("Free entry to win cash prizes"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

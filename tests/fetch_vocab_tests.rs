//! Token matcher tests against the fixed vocabularies

use fetch_console::fetch::vocab::{
    token_match, COMMANDS, GPIO_ACTIONS, GPIO_DIRECTIONS, GPIO_SENSES, PINS, PORTS,
};

fn all_vocabularies() -> [&'static [&'static str]; 6] {
    [COMMANDS, GPIO_ACTIONS, GPIO_DIRECTIONS, GPIO_SENSES, PORTS, PINS]
}

#[test]
fn test_every_token_matches_its_own_index() {
    for vocab in all_vocabularies() {
        for (i, token) in vocab.iter().enumerate() {
            assert_eq!(
                token_match(vocab, token),
                Some(i),
                "token '{}' is shadowed by an earlier entry",
                token
            );
        }
    }
}

#[test]
fn test_matching_is_case_insensitive() {
    for vocab in all_vocabularies() {
        for (i, token) in vocab.iter().enumerate() {
            let upper = token.to_uppercase();
            assert_eq!(token_match(vocab, &upper), Some(i), "uppercase '{}'", upper);

            let mixed: String = token
                .chars()
                .enumerate()
                .map(|(j, c)| {
                    if j % 2 == 0 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            assert_eq!(token_match(vocab, &mixed), Some(i), "mixed case '{}'", mixed);
        }
    }
}

#[test]
fn test_unknown_tokens_are_not_found() {
    assert_eq!(token_match(COMMANDS, "frobnicate"), None);
    assert_eq!(token_match(GPIO_ACTIONS, "toggle"), None);
    assert_eq!(token_match(PORTS, "portj"), None);
    assert_eq!(token_match(PINS, "pin16"), None);
    assert_eq!(token_match(GPIO_SENSES, "sticky"), None);
}

#[test]
fn test_pin1_and_pin10_resolve_separately() {
    let pin1 = token_match(PINS, "pin1");
    let pin10 = token_match(PINS, "pin10");

    assert_eq!(pin1, Some(1));
    assert_eq!(pin10, Some(10));
    assert_ne!(pin1, pin10);
}

#[test]
fn test_all_two_digit_pins_resolve() {
    for (i, token) in PINS.iter().enumerate().skip(10) {
        assert_eq!(token_match(PINS, token), Some(i));
    }
}

#[test]
fn test_short_entries_do_not_prefix_match() {
    assert_eq!(token_match(GPIO_ACTIONS, "getx"), None);
    assert_eq!(token_match(PINS, "pin"), None);
    assert_eq!(token_match(PINS, "pin150"), None);
    assert_eq!(token_match(PORTS, "port"), None);
}

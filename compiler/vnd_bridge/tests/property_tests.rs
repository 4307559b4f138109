//! Property-based tests for the bridge over the real lexer core.
//!
//! Verifies, for arbitrary source text:
//! 1. Bridging succeeds unless an argument contains a NUL byte
//! 2. Idempotence: two bridge calls yield structurally equal token lists
//! 3. Every list ends with exactly one `Eoft`, and no token ever has a kind
//!    outside the local vocabulary

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use proptest::prelude::*;
use vnd_bridge::{bridge, BridgeArgument, BridgeError, TokenKind};

/// Source-like text: identifiers, numbers, operators, and the occasional
/// stray character.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(concat!(
        r"([a-z_][a-z0-9_]{0,6}",
        r"|[0-9]{1,4}(\.[0-9]{1,3})?",
        r"|[-+*/=<>!&|^%(){}\[\],:.;@]{1,2}",
        r"|[ \n]{1,2})*",
    ))
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bridge_is_idempotent(source in source_strategy()) {
        let first = bridge("prop.vn", &source).unwrap();
        let second = bridge("prop.vn", &source).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_text_bridges_cleanly(source in any::<String>()) {
        match bridge("prop.vn", &source) {
            Ok(tokens) => {
                prop_assert!(!source.contains('\0'));
                prop_assert_eq!(tokens.as_slice().last().map(|t| t.kind), Some(TokenKind::Eoft));
                prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eoft).count(), 1);
                prop_assert!(tokens.iter().all(|t| TokenKind::ALL.contains(&t.kind)));
            }
            Err(err) => {
                let position = source.find('\0').unwrap();
                prop_assert_eq!(
                    err,
                    BridgeError::InteriorNul { argument: BridgeArgument::Source, position }
                );
            }
        }
    }

    #[test]
    fn token_text_is_a_fragment_of_the_source(source in source_strategy()) {
        let tokens = bridge("prop.vn", &source).unwrap();
        for token in &tokens {
            prop_assert!(source.contains(token.text.as_str()), "{:?}", token);
        }
    }
}

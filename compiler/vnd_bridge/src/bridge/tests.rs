use std::panic::{self, AssertUnwindSafe};
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use vnd_ir::TokenKind;
use vnd_lexer_core::{RawSourceLocation, RawTokenKind};

use super::*;
use crate::EnvelopeFault;

/// One scripted token: `(kind discriminant, text, line, column)`.
/// `None` text is sent as a null pointer.
type Row = (u32, Option<&'static str>, usize, usize);

enum Script {
    /// Real storage holding these tokens; the file name is the one passed to
    /// `tokenize`.
    Tokens(Vec<Row>),
    /// A fabricated envelope over storage that must never be read.
    Fabricated {
        null_items: bool,
        size: usize,
        capacity: usize,
    },
}

/// Scripted [`TokenSource`] that counts calls.
struct Scripted {
    script: Script,
    tokenize_calls: AtomicUsize,
    releases: AtomicUsize,
}

impl Scripted {
    fn tokens(rows: Vec<Row>) -> Self {
        Self::with(Script::Tokens(rows))
    }

    fn fabricated(null_items: bool, size: usize, capacity: usize) -> Self {
        Self::with(Script::Fabricated {
            null_items,
            size,
            capacity,
        })
    }

    fn with(script: Script) -> Self {
        Scripted {
            script,
            tokenize_calls: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
        }
    }

    fn tokenize_calls(&self) -> usize {
        self.tokenize_calls.load(Ordering::SeqCst)
    }

    fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

fn leak(text: &str) -> *mut c_char {
    CString::new(text).unwrap().into_raw()
}

impl TokenSource for Scripted {
    fn tokenize(&self, file_name: &CStr, _source: &CStr) -> TransferEnvelope {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Tokens(rows) => {
                let file_name = file_name.to_str().unwrap();
                let items: Vec<RawToken> = rows
                    .iter()
                    .map(|&(kind, text, line, column)| RawToken {
                        kind,
                        value: text.map_or(ptr::null_mut(), leak),
                        location: RawSourceLocation {
                            file_name: leak(file_name),
                            line,
                            column,
                        },
                    })
                    .collect();
                let mut items = std::mem::ManuallyDrop::new(items);
                TransferEnvelope {
                    items: items.as_mut_ptr(),
                    size: items.len(),
                    capacity: items.capacity(),
                }
            }
            Script::Fabricated {
                null_items,
                size,
                capacity,
            } => TransferEnvelope {
                items: if *null_items {
                    ptr::null_mut()
                } else {
                    NonNull::dangling().as_ptr()
                },
                size: *size,
                capacity: *capacity,
            },
        }
    }

    unsafe fn release(&self, envelope: TransferEnvelope) {
        self.releases.fetch_add(1, Ordering::SeqCst);
        if let Script::Tokens(_) = self.script {
            // SAFETY: built by `tokenize` above from a leaked Vec and leaked
            // CStrings.
            let items = unsafe {
                Vec::from_raw_parts(envelope.items, envelope.size, envelope.capacity)
            };
            for item in items {
                for text in [item.value, item.location.file_name] {
                    if !text.is_null() {
                        // SAFETY: leaked by `leak`.
                        drop(unsafe { CString::from_raw(text) });
                    }
                }
            }
        }
    }
}

fn kind(raw: RawTokenKind) -> u32 {
    raw.to_raw()
}

fn loc(line: usize, column: usize) -> SourceLocation {
    SourceLocation::new("test.vn", line, column)
}

// === Scenarios ===

#[test]
fn declaration_is_bridged_verbatim() {
    let source = Scripted::tokens(vec![
        (kind(RawTokenKind::KVar), Some("var"), 1, 0),
        (kind(RawTokenKind::Identifier), Some("x"), 1, 4),
        (kind(RawTokenKind::Equal), Some("="), 1, 6),
        (kind(RawTokenKind::Integer), Some("1"), 1, 8),
        (kind(RawTokenKind::Eoft), Some(""), 1, 10),
    ]);
    let bridge = Bridge::new(source);

    let tokens = bridge.bridge("test.vn", "var x = 1;").unwrap();

    assert_eq!(
        tokens,
        TokenList::from_vec(vec![
            Token::new(TokenKind::KwVar, "var", loc(1, 0)),
            Token::new(TokenKind::Identifier, "x", loc(1, 4)),
            Token::new(TokenKind::Equal, "=", loc(1, 6)),
            Token::new(TokenKind::Integer, "1", loc(1, 8)),
            Token::new(TokenKind::Eoft, "", loc(1, 10)),
        ])
    );
    assert_eq!(bridge.source().tokenize_calls(), 1);
    assert_eq!(bridge.source().releases(), 1);
}

#[test]
fn size_over_capacity_is_rejected_and_released() {
    let bridge = Bridge::new(Scripted::fabricated(false, 5, 3));

    let result = bridge.bridge("test.vn", "anything");

    assert_eq!(
        result,
        Err(BridgeError::InvalidEnvelope(
            EnvelopeFault::SizeExceedsCapacity {
                size: 5,
                capacity: 3
            }
        ))
    );
    assert_eq!(bridge.source().releases(), 1);
}

#[test]
fn empty_null_envelope_is_an_empty_list() {
    let bridge = Bridge::new(Scripted::fabricated(true, 0, 0));

    let tokens = bridge.bridge("test.vn", "").unwrap();

    assert!(tokens.is_empty());
    assert_eq!(bridge.source().releases(), 1);
}

// === Envelope edge cases ===

#[test]
fn zero_size_ignores_items_and_capacity() {
    let bridge = Bridge::new(Scripted::fabricated(false, 0, 16));
    assert_eq!(bridge.bridge("test.vn", "x"), Ok(TokenList::new()));
    assert_eq!(bridge.source().releases(), 1);
}

#[test]
fn null_items_with_size_is_rejected_and_released() {
    let bridge = Bridge::new(Scripted::fabricated(true, 2, 2));
    let err = bridge.bridge("test.vn", "x").unwrap_err();
    assert_eq!(
        err,
        BridgeError::InvalidEnvelope(EnvelopeFault::NullItems { size: 2 })
    );
    assert!(err.is_invalid_envelope());
    assert_eq!(bridge.source().releases(), 1);
}

#[test]
fn empty_token_storage_is_released() {
    let bridge = Bridge::new(Scripted::tokens(Vec::new()));
    assert_eq!(bridge.bridge("test.vn", ""), Ok(TokenList::new()));
    assert_eq!(bridge.source().releases(), 1);
}

// === Element copy ===

#[test]
fn unrecognized_discriminant_becomes_unknown() {
    let bridge = Bridge::new(Scripted::tokens(vec![
        (999, Some("??"), 3, 2),
        (kind(RawTokenKind::Eoft), Some(""), 3, 4),
    ]));

    let tokens = bridge.bridge("test.vn", "??").unwrap();

    assert_eq!(tokens.kinds(), vec![TokenKind::Unknown, TokenKind::Eoft]);
    assert_eq!(tokens[0].text, "??");
    assert_eq!(tokens[0].location, loc(3, 2));
}

#[test]
fn null_text_reads_as_empty() {
    let bridge = Bridge::new(Scripted::tokens(vec![(
        kind(RawTokenKind::Eoft),
        None,
        1,
        0,
    )]));
    let tokens = bridge.bridge("test.vn", "").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Eoft, "", loc(1, 0)));
}

#[test]
fn file_name_is_copied_from_the_envelope() {
    let bridge = Bridge::new(Scripted::tokens(vec![(
        kind(RawTokenKind::Eoft),
        Some(""),
        1,
        0,
    )]));
    let tokens = bridge.bridge("dir/ünïcode.vn", "").unwrap();
    assert_eq!(tokens[0].location.file_name, "dir/ünïcode.vn");
}

#[test]
fn bridged_tokens_outlive_the_envelope() {
    let bridge = Bridge::new(Scripted::tokens(vec![
        (kind(RawTokenKind::String), Some("hello"), 1, 0),
        (kind(RawTokenKind::Eoft), Some(""), 1, 7),
    ]));
    let tokens = bridge.bridge("test.vn", "\"hello\"").unwrap();
    assert_eq!(bridge.source().releases(), 1);
    assert_eq!(tokens[0].text, "hello");
    assert_eq!(tokens[0].kind, TokenKind::String);
}

// === Argument checks ===

#[test]
fn interior_nul_in_source_never_reaches_tokenizer() {
    let bridge = Bridge::new(Scripted::tokens(Vec::new()));
    let err = bridge.bridge("test.vn", "var\0x").unwrap_err();
    assert_eq!(
        err,
        BridgeError::InteriorNul {
            argument: BridgeArgument::Source,
            position: 3
        }
    );
    assert!(!err.is_invalid_envelope());
    assert_eq!(err.to_string(), "source contains a NUL byte at offset 3");
    assert_eq!(bridge.source().tokenize_calls(), 0);
    assert_eq!(bridge.source().releases(), 0);
}

#[test]
fn interior_nul_in_file_name() {
    let bridge = Bridge::new(Scripted::tokens(Vec::new()));
    assert_eq!(
        bridge.bridge("\0", "x"),
        Err(BridgeError::InteriorNul {
            argument: BridgeArgument::FileName,
            position: 0
        })
    );
    assert_eq!(bridge.source().tokenize_calls(), 0);
}

// === Release guard ===

#[test]
fn guard_releases_on_unwind() {
    let source = Scripted::fabricated(false, 1, 1);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let file_name = CString::new("test.vn").unwrap();
        let envelope = source.tokenize(&file_name, &file_name);
        let _received = ReceivedEnvelope::new(&source, envelope);
        panic!("copy failed");
    }));
    assert!(result.is_err());
    assert_eq!(source.releases(), 1);
}

// === Batches ===

#[test]
fn bridge_all_matches_sequential_bridging() {
    let bridge = Bridge::new(Scripted::tokens(vec![
        (kind(RawTokenKind::Identifier), Some("x"), 1, 0),
        (kind(RawTokenKind::Eoft), Some(""), 1, 1),
    ]));
    let inputs = [("a.vn", "x"), ("b.vn", "x"), ("c\0.vn", "x"), ("d.vn", "x")];

    let batch = bridge.bridge_all(&inputs);
    let sequential: Vec<_> = inputs
        .iter()
        .map(|(file_name, source)| bridge.bridge(file_name, source))
        .collect();

    assert_eq!(batch, sequential);
    assert!(batch[2].is_err());
    assert_eq!(batch[3].as_ref().unwrap()[0].location.file_name, "d.vn");
    // Three valid inputs per pass, two passes.
    assert_eq!(bridge.source().releases(), 6);
}

#[test]
fn stage_names() {
    assert_eq!(BridgeStage::EnvelopeReceived.to_string(), "envelope-received");
    assert_eq!(BridgeStage::Validated.to_string(), "validated");
    assert_eq!(BridgeStage::Copied.to_string(), "copied");
    assert_eq!(BridgeStage::Released.to_string(), "released");
    assert_eq!(BridgeStage::Rejected.to_string(), "rejected");
}

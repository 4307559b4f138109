//! Vandior token bridge.
//!
//! Moves token batches out of the lexer core's allocation domain and into
//! owned [`TokenList`]s that speak the local [`TokenKind`] vocabulary.
//!
//! # Pipeline
//!
//! ```text
//! TokenSource::tokenize -> TransferEnvelope
//!     -> validate            (structural check, no reads)
//!     -> translate + copy    (element-wise, all or nothing)
//!     -> TokenSource::release (exactly once)
//!     -> TokenList
//! ```
//!
//! # Tracing
//!
//! Stage transitions are emitted as `trace` events inside a `debug` span per
//! call. Enable with environment variables after [`init_tracing`]:
//! - `RUST_LOG=vnd_bridge=debug` - One span and summary per bridged file
//! - `RUST_LOG=vnd_bridge=trace` - Every stage transition
//!
//! [`TokenKind`]: vnd_ir::TokenKind

mod bridge;
mod envelope;
mod error;
mod source;
mod translate;

use std::sync::Once;

pub use bridge::{Bridge, BridgeStage};
pub use envelope::{validate, TransferEnvelope};
pub use error::{BoundaryError, BridgeArgument, BridgeError, EnvelopeFault};
pub use source::{CoreTokenizer, TokenSource};
pub use translate::{translate, translate_kind};
pub use vnd_ir::{SourceLocation, Token, TokenKind, TokenList};

/// Tokenize `source` with the lexer core and return owned tokens.
///
/// Shorthand for [`Bridge::core`] followed by [`Bridge::bridge`].
pub fn bridge(file_name: &str, source: &str) -> Result<TokenList, BridgeError> {
    Bridge::core().bridge(file_name, source)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

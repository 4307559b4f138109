//! C ABI for the lexer core.
//!
//! A token batch crosses the boundary as a [`TokenArray`]: a pointer to a
//! contiguous run of [`RawToken`]s plus `size` and `capacity`. The buffer is
//! a leaked `Vec<RawToken>`, and every string inside is a leaked `CString`.
//! Both are reclaimed by [`vnd_token_array_free`].

use std::ffi::{c_char, CStr, CString};
use std::mem::ManuallyDrop;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use crate::scanner::{scan, ScannedToken};
use crate::RawTokenKind;

/// Location of a token as seen across the C ABI.
#[repr(C)]
#[derive(Debug)]
pub struct RawSourceLocation {
    /// Owned NUL-terminated file name.
    pub file_name: *mut c_char,
    pub line: usize,
    pub column: usize,
}

/// A token as seen across the C ABI.
#[repr(C)]
#[derive(Debug)]
pub struct RawToken {
    /// A [`RawTokenKind`](crate::RawTokenKind) discriminant. Kept as a plain
    /// integer so a foreign writer can never produce an invalid enum value.
    pub kind: u32,
    /// Owned NUL-terminated token text.
    pub value: *mut c_char,
    pub location: RawSourceLocation,
}

impl RawToken {
    fn from_scanned(token: &ScannedToken<'_>, file_name: &str) -> Self {
        RawToken {
            kind: token.kind.to_raw(),
            value: owned_c_string(token.text),
            location: RawSourceLocation {
                file_name: owned_c_string(file_name),
                line: token.line,
                column: token.column,
            },
        }
    }

    /// End-of-stream marker at the start of `file_name`.
    fn eoft(file_name: &str) -> Self {
        RawToken {
            kind: RawTokenKind::Eoft.to_raw(),
            value: owned_c_string(""),
            location: RawSourceLocation {
                file_name: owned_c_string(file_name),
                line: 1,
                column: 0,
            },
        }
    }

    /// Reclaim both strings.
    ///
    /// # Safety
    ///
    /// Each non-null pointer must come from `CString::into_raw` and must not
    /// have been reclaimed already.
    unsafe fn release_strings(self) {
        for text in [self.value, self.location.file_name] {
            if !text.is_null() {
                // SAFETY: guaranteed by the caller.
                drop(unsafe { CString::from_raw(text) });
            }
        }
    }
}

/// A batch of tokens handed across the C ABI.
///
/// Owns its item buffer and every string inside it until passed to
/// [`vnd_token_array_free`].
#[repr(C)]
#[derive(Debug)]
pub struct TokenArray {
    pub items: *mut RawToken,
    pub size: usize,
    pub capacity: usize,
}

impl TokenArray {
    /// An array with no buffer.
    pub const EMPTY: TokenArray = TokenArray {
        items: ptr::null_mut(),
        size: 0,
        capacity: 0,
    };

    fn from_tokens(tokens: Vec<RawToken>) -> Self {
        if tokens.capacity() == 0 {
            return TokenArray::EMPTY;
        }
        let mut tokens = ManuallyDrop::new(tokens);
        TokenArray {
            items: tokens.as_mut_ptr(),
            size: tokens.len(),
            capacity: tokens.capacity(),
        }
    }
}

/// Leak `text` as a NUL-terminated string. Interior NUL bytes are dropped.
fn owned_c_string(text: &str) -> *mut c_char {
    let bytes: Vec<u8> = text.bytes().filter(|&b| b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

/// Read a C string argument. Null reads as empty; invalid UTF-8 is replaced.
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated string valid for the
/// duration of the call.
unsafe fn read_c_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: guaranteed by the caller.
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// Tokenize `source` into a freshly allocated [`TokenArray`].
///
/// The array always ends with an `Eoft` token and must be released with
/// [`vnd_token_array_free`].
pub fn tokenize(file_name: &str, source: &str) -> TokenArray {
    let tokens: Vec<RawToken> = scan(source)
        .iter()
        .map(|token| RawToken::from_scanned(token, file_name))
        .collect();
    TokenArray::from_tokens(tokens)
}

/// Run `produce`, which must not unwind across the C ABI.
///
/// A panic becomes a batch holding a lone `Eoft` for `file_name`, so the
/// caller still receives a well-formed array.
fn catch_unwind_batch(file_name: &str, produce: impl FnOnce() -> TokenArray) -> TokenArray {
    panic::catch_unwind(AssertUnwindSafe(produce))
        .unwrap_or_else(|_| TokenArray::from_tokens(vec![RawToken::eoft(file_name)]))
}

/// Tokenize a NUL-terminated `source`. C ABI wrapper around [`tokenize`].
///
/// Null arguments read as the empty string. Neither argument is retained.
#[no_mangle]
pub extern "C" fn vnd_tokenize(file_name: *const c_char, source: *const c_char) -> TokenArray {
    // SAFETY: caller passes null or valid NUL-terminated strings.
    let file_name = unsafe { read_c_str(file_name) };
    // SAFETY: as above.
    let source = unsafe { read_c_str(source) };
    catch_unwind_batch(&file_name, || tokenize(&file_name, &source))
}

/// Release a [`TokenArray`] returned by [`vnd_tokenize`].
///
/// Null `items` is a no-op. Each array must be released exactly once.
#[no_mangle]
pub extern "C" fn vnd_token_array_free(array: TokenArray) {
    if array.items.is_null() {
        return;
    }
    let initialized = array.size.min(array.capacity);
    // SAFETY: `items` and `capacity` describe a buffer leaked by
    // `TokenArray::from_tokens`, whose first `size` elements are initialized.
    let tokens = unsafe { Vec::from_raw_parts(array.items, initialized, array.capacity) };
    for token in tokens {
        // SAFETY: strings were leaked by `owned_c_string` and are reclaimed
        // only here.
        unsafe { token.release_strings() };
    }
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<RawToken>() == 40);

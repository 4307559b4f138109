//! Source locations.

use std::fmt;

/// File, line and column of a lexical element.
///
/// Lines are 1-based. Columns count characters (not bytes) from the start
/// of the line, starting at 0.
///
/// `{}` renders `(file: main.vn, line: 3, column: 8)`; the alternate form
/// `{:#}` renders the compact `(fn: main.vn, ln: 3, cln: 8)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    pub file_name: String,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    /// Create a new location.
    #[inline]
    pub fn new(file_name: impl Into<String>, line: usize, column: usize) -> Self {
        SourceLocation {
            file_name: file_name.into(),
            line,
            column,
        }
    }

    /// Compact rendering used by the alternate `Display` form.
    pub fn to_compact_string(&self) -> String {
        format!(
            "(fn: {}, ln: {}, cln: {})",
            self.file_name, self.line, self.column
        )
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.to_compact_string())
        } else {
            write!(
                f,
                "(file: {}, line: {}, column: {})",
                self.file_name, self.line, self.column
            )
        }
    }
}

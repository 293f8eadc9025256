//! Text formatting modes for rendered documents.

use crate::error::QueryBuilderError;
use std::fmt;
use std::str::FromStr;

/// How a query document is laid out when rendered.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::Formatting;
///
/// let formatting: Formatting = "indented".parse().unwrap();
/// assert_eq!(formatting, Formatting::Indented);
/// assert_eq!(Formatting::None.to_string(), "none");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Formatting {
    /// Compact single-line output without extraneous whitespace.
    None,
    /// Multi-line output with one selection per line.
    #[default]
    Indented,
}

impl Formatting {
    /// Returns `true` for [`Formatting::Indented`].
    #[must_use]
    pub const fn is_indented(self) -> bool {
        matches!(self, Self::Indented)
    }

    /// Returns the whitespace for `level` nesting levels, or an empty
    /// string in compact mode.
    #[must_use]
    pub fn indentation(self, level: usize, indentation_size: u8) -> String {
        if self.is_indented() {
            indentation(level, indentation_size)
        } else {
            String::new()
        }
    }

    /// Returns a single space in indented mode, nothing otherwise.
    pub(crate) const fn space(self) -> &'static str {
        if self.is_indented() {
            " "
        } else {
            ""
        }
    }
}

/// Returns `level * indentation_size` spaces.
#[must_use]
pub fn indentation(level: usize, indentation_size: u8) -> String {
    " ".repeat(level * usize::from(indentation_size))
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::None => "none",
            Self::Indented => "indented",
        };
        f.write_str(value)
    }
}

impl FromStr for Formatting {
    type Err = QueryBuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "none" | "compact" => Ok(Self::None),
            "indented" => Ok(Self::Indented),
            _ => Err(QueryBuilderError::InvalidFormatting { value: s }),
        }
    }
}

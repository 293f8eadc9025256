//! Rendering configuration for query documents.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RenderOptions`]: The settings used when a document is rendered to text
//! - [`RenderOptionsBuilder`]: A builder for constructing [`RenderOptions`] instances
//! - [`Formatting`]: Compact or indented output
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{Formatting, RenderOptions};
//!
//! let options = RenderOptions::builder()
//!     .formatting(Formatting::Indented)
//!     .indentation_size(4)
//!     .build();
//!
//! assert_eq!(options.indentation_size(), 4);
//! ```

mod formatting;

pub use formatting::{indentation, Formatting};

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENTATION_SIZE: u8 = 2;

/// Settings used when rendering a document.
///
/// `RenderOptions` is `Copy`, `Send` and `Sync`; a single instance can be
/// reused for any number of renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    formatting: Formatting,
    indentation_size: u8,
}

impl RenderOptions {
    /// Creates a new builder for constructing `RenderOptions`.
    #[must_use]
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Compact output, no whitespace between tokens.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            formatting: Formatting::None,
            indentation_size: DEFAULT_INDENTATION_SIZE,
        }
    }

    /// Indented output with the given number of spaces per level.
    #[must_use]
    pub const fn indented(indentation_size: u8) -> Self {
        Self {
            formatting: Formatting::Indented,
            indentation_size,
        }
    }

    /// Returns the formatting mode.
    #[must_use]
    pub const fn formatting(&self) -> Formatting {
        self.formatting
    }

    /// Returns the number of spaces per nesting level.
    #[must_use]
    pub const fn indentation_size(&self) -> u8 {
        self.indentation_size
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::indented(DEFAULT_INDENTATION_SIZE)
    }
}

/// Builder for constructing [`RenderOptions`] instances.
///
/// # Defaults
///
/// - `formatting`: [`Formatting::Indented`]
/// - `indentation_size`: 2
#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    formatting: Option<Formatting>,
    indentation_size: Option<u8>,
}

impl RenderOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the formatting mode.
    #[must_use]
    pub const fn formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = Some(formatting);
        self
    }

    /// Sets the number of spaces per nesting level.
    ///
    /// Ignored in compact mode.
    #[must_use]
    pub const fn indentation_size(mut self, size: u8) -> Self {
        self.indentation_size = Some(size);
        self
    }

    /// Builds the [`RenderOptions`].
    #[must_use]
    pub fn build(self) -> RenderOptions {
        RenderOptions {
            formatting: self.formatting.unwrap_or_default(),
            indentation_size: self.indentation_size.unwrap_or(DEFAULT_INDENTATION_SIZE),
        }
    }
}

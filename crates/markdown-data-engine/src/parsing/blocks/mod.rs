//! # Block Parsing
//!
//! Two-phase, line-based block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only, given the mode the builder is in (document start, body,
//!    inside a fence, inside front matter)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` feeds classified lines to
//!    the pending scanner and emits `Located` elements as runs open and close
//!
//! ## Modules
//!
//! - **`kinds`**: Block syntax with owned delimiters (Heading, CodeFence, ListMarker, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerStack` for building nested list and quote items
//! - **`scanners`**: One scanner per multi-line kind
//! - **`builder`**: `BlockBuilder` state machine for element construction
//!
//! ## Key Invariants
//!
//! - Parsing never fails: malformed blocks degrade to paragraphs or separators
//! - Fenced code blocks are raw zones: no classification inside
//! - Nesting depth of lists and quotes is unbounded

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod scanners;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier, Mode};

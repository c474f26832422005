//! Block syntax, one type per kind.
//!
//! Each type owns the delimiters and recognition rules for its kind so the
//! classifier and renderer never repeat them.

pub mod block_quote;
pub mod code_fence;
pub mod definition;
pub mod header;
pub mod indent;
pub mod list_item;
pub mod metadata;
pub mod separator;
pub mod table_row;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceMarker};
pub use definition::Definition;
pub use header::Heading;
pub use indent::{INDENT_WIDTH, measure_indent};
pub use list_item::{ListLine, ListMarker};
pub use metadata::FrontMatter;
pub use separator::Separator;
pub use table_row::TableRow;

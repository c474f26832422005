pub mod element;
pub mod list;
pub mod metadata;
pub mod quote;
pub mod table;
mod unique_map;

pub use element::{Code, DefList, Element, ElementKind, Header, ThematicBreak};
pub use list::{List, ListItem, ListKind, Task};
pub use metadata::{MetaValue, Metadata};
pub use quote::{Blockquote, QuoteItem};
pub use table::{Column, Table};

pub mod error;
pub mod inspect;
pub mod json;
pub mod keys;
pub mod models;
pub mod outline;
pub mod parsing;
pub mod render;
pub mod select;

// Re-export key types for easier usage
pub use error::{Error, Result};
pub use inspect::{Inspection, KindStats, inspect};
pub use json::{from_json, outline_to_json, to_json, to_json_string};
pub use models::{Element, ElementKind};
pub use outline::Outline;
pub use parsing::{Located, parse, parse_located};
pub use render::{render, validate};
pub use select::{Include, RenderOptions, Selector, Spacer, select};

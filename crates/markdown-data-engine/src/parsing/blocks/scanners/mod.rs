//! One scanner per multi-line element kind.
//!
//! A scanner is created by the builder on the first line of its run, fed the
//! lines that continue it, and finished into a [`Located`](crate::parsing::Located)
//! element. Fence and metadata scanners also buffer their raw lines so the
//! builder can scan them again when the block never closes.

pub mod code;
pub mod definition;
pub mod list;
pub mod metadata;
pub mod quote;
pub mod table;

pub use code::FenceScan;
pub use definition::DefListScan;
pub use list::ListScan;
pub use metadata::MetadataScan;
pub use quote::QuoteScan;
pub use table::TableScan;

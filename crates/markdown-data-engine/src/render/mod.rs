//! # Rendering
//!
//! Turns an element sequence back into markdown text.
//!
//! The whole sequence is validated first ([`validate`]), then the retained
//! elements are emitted one block each ([`emit`]) and joined with the
//! configured number of empty lines. Output has no trailing newline and an
//! empty selection renders as `""`.

pub mod emit;
pub mod validate;

pub use validate::validate;

use crate::{error::Result, models::Element, select::RenderOptions};

pub fn render(elements: &[Element], options: &RenderOptions) -> Result<String> {
    validate(elements)?;

    let separator = "\n".repeat(options.spacer.get() + 1);
    let blocks: Vec<String> = options
        .retained(elements)
        .enumerate()
        .map(|(i, (_, element))| {
            let lines = if i == 0 {
                emit::leading_lines(element)
            } else {
                emit::element_lines(element)
            };
            lines.join("\n")
        })
        .collect();

    log::debug!("Rendered {} of {} elements", blocks.len(), elements.len());
    Ok(blocks.join(&separator))
}

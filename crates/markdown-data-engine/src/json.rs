//! JSON in and out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, ser::PrettyFormatter, value::RawValue};

use crate::{
    error::{Error, Result},
    models::{Element, ElementKind},
    outline::Outline,
    parsing::Located,
};

/// Keys a located entry carries beside its element tag.
const LINE_KEYS: [&str; 2] = ["start_line", "end_line"];

pub fn to_json(elements: &[Element]) -> Result<Value> {
    Ok(serde_json::to_value(elements)?)
}

pub fn located_to_json(located: &[Located]) -> Result<Value> {
    Ok(serde_json::to_value(located)?)
}

pub fn outline_to_json(outline: &Outline) -> Result<Value> {
    Ok(serde_json::to_value(outline)?)
}

/// Reads an element sequence.
///
/// Accepts the output of both [`to_json`] and [`located_to_json`]; line
/// ranges are ignored. An entry that does not read as an element fails with
/// [`Error::MalformedElement`] naming its index and kind, or with
/// [`Error::UnknownElementKind`] when its tag is not a kind. Tables and
/// metadata with a repeated key are malformed.
pub fn from_json(text: &str) -> Result<Vec<Element>> {
    let entries: Vec<&RawValue> = serde_json::from_str(text)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, raw)| read_entry(index, raw))
        .collect()
}

fn read_entry(index: usize, raw: &RawValue) -> Result<Element> {
    let error = match serde_json::from_str::<Entry>(raw.get()) {
        Ok(entry) => return Ok(entry.element),
        Err(error) => error,
    };
    // Only objects carry a tag to blame; anything else keeps the plain error.
    let Ok(fields) = serde_json::from_str::<Map<String, Value>>(raw.get()) else {
        return Err(error.into());
    };
    let Some(tag) = fields.keys().find(|key| !LINE_KEYS.contains(&key.as_str())) else {
        return Err(error.into());
    };
    match ElementKind::from_name(tag) {
        Some(kind) => Err(Error::MalformedElement {
            index,
            kind,
            expected: format!("a valid {kind} payload"),
            actual: error.to_string(),
        }),
        None => Err(Error::UnknownElementKind { name: tag.clone() }),
    }
}

/// An element with any sibling keys dropped.
#[derive(Deserialize)]
struct Entry {
    #[serde(flatten)]
    element: Element,
}

/// Compact when `indent` is `None`, otherwise pretty with that many spaces.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, indent: Option<usize>) -> Result<String> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };
    let indent = " ".repeat(width);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Blockquote, List, Metadata, Table};

/// One markdown building block.
///
/// Serialized externally tagged, so a header becomes
/// `{"header": {"level": 1, "title": "Title"}}` and a paragraph becomes
/// `{"paragraph": "text"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Metadata(Metadata),
    Header(Header),
    /// One physical line of plain text, kept verbatim.
    Paragraph(String),
    List(List),
    Table(Table),
    Code(Code),
    DefList(DefList),
    Blockquote(Blockquote),
    Separator(ThematicBreak),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Metadata(_) => ElementKind::Metadata,
            Element::Header(_) => ElementKind::Header,
            Element::Paragraph(_) => ElementKind::Paragraph,
            Element::List(_) => ElementKind::List,
            Element::Table(_) => ElementKind::Table,
            Element::Code(_) => ElementKind::Code,
            Element::DefList(_) => ElementKind::DefList,
            Element::Blockquote(_) => ElementKind::Blockquote,
            Element::Separator(_) => ElementKind::Separator,
        }
    }

    pub fn header(level: u8, title: impl Into<String>) -> Self {
        Element::Header(Header {
            level,
            title: title.into(),
        })
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Element::Paragraph(text.into())
    }

    pub fn separator() -> Self {
        Element::Separator(ThematicBreak)
    }
}

/// The tag of an [`Element`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Metadata,
    Header,
    Paragraph,
    List,
    Table,
    Code,
    DefList,
    Blockquote,
    Separator,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Metadata,
        ElementKind::Header,
        ElementKind::Paragraph,
        ElementKind::List,
        ElementKind::Table,
        ElementKind::Code,
        ElementKind::DefList,
        ElementKind::Blockquote,
        ElementKind::Separator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Metadata => "metadata",
            ElementKind::Header => "header",
            ElementKind::Paragraph => "paragraph",
            ElementKind::List => "list",
            ElementKind::Table => "table",
            ElementKind::Code => "code",
            ElementKind::DefList => "def_list",
            ElementKind::Blockquote => "blockquote",
            ElementKind::Separator => "separator",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub level: u8,
    #[serde(alias = "content")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub language: Option<String>,
    pub content: String,
}

impl Code {
    pub fn new(language: Option<&str>, content: impl Into<String>) -> Self {
        Self {
            language: language.map(str::to_string),
            content: content.into(),
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|language| !language.trim().is_empty()))
}

/// A term followed by its `: definition` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefList {
    pub term: String,
    #[serde(rename = "list")]
    pub definitions: Vec<String>,
}

/// A standalone `---` line. Carries no data and serializes as `"---"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";
    /// Written instead of [`Self::MARKER`] on the first line of a document,
    /// where `---` opens front matter.
    pub const LEADING_MARKER: &'static str = "***";
}

impl Serialize for ThematicBreak {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::MARKER)
    }
}

impl<'de> Deserialize<'de> for ThematicBreak {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let marker = String::deserialize(deserializer)?;
        if crate::parsing::blocks::kinds::Separator::matches(&marker) {
            Ok(ThematicBreak)
        } else {
            Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&marker),
                &"a thematic break such as `---`",
            ))
        }
    }
}

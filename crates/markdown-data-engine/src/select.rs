//! Element selectors and render options.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    models::{Element, ElementKind},
    parsing::blocks::kinds::Heading,
};

/// Picks elements by kind, header level or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    All,
    Kind(ElementKind),
    HeaderLevel(u8),
    Position(usize),
}

impl Selector {
    pub const ALL: &'static str = "all";
    const HEADERS: &'static str = "headers";

    pub fn matches(self, index: usize, element: &Element) -> bool {
        match self {
            Selector::All => true,
            Selector::Kind(kind) => element.kind() == kind,
            Selector::HeaderLevel(level) => {
                matches!(element, Element::Header(h) if h.level == level)
            }
            Selector::Position(position) => position == index,
        }
    }

    /// Parses every name, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<Selector>> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }

    fn header_level(name: &str) -> Option<u8> {
        let level: u8 = name.strip_prefix('h')?.parse().ok()?;
        (1..=Heading::MAX_LEVEL).contains(&level).then_some(level)
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name == Self::ALL {
            return Ok(Selector::All);
        }
        if name == Self::HEADERS {
            return Ok(Selector::Kind(ElementKind::Header));
        }
        if let Some(kind) = ElementKind::from_name(name) {
            return Ok(Selector::Kind(kind));
        }
        if let Some(level) = Self::header_level(name) {
            return Ok(Selector::HeaderLevel(level));
        }
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(position) = name.parse() {
                return Ok(Selector::Position(position));
            }
        }
        Err(Error::UnknownElementKind {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(Self::ALL),
            Selector::Kind(kind) => write!(f, "{kind}"),
            Selector::HeaderLevel(level) => write!(f, "h{level}"),
            Selector::Position(position) => write!(f, "{position}"),
        }
    }
}

/// Elements matching any selector, in document order.
pub fn select(elements: &[Element], selectors: &[Selector]) -> Vec<Element> {
    elements
        .iter()
        .enumerate()
        .filter(|(i, e)| selectors.iter().any(|s| s.matches(*i, e)))
        .map(|(_, e)| e.clone())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Include {
    #[default]
    All,
    Only(BTreeSet<Selector>),
}

impl Include {
    /// An empty set or one containing `all` includes everything.
    pub fn from_selectors(selectors: BTreeSet<Selector>) -> Self {
        if selectors.is_empty() || selectors.contains(&Selector::All) {
            Include::All
        } else {
            Include::Only(selectors)
        }
    }

    fn matches(&self, index: usize, element: &Element) -> bool {
        match self {
            Include::All => true,
            Include::Only(selectors) => selectors.iter().any(|s| s.matches(index, element)),
        }
    }
}

/// Number of empty lines between rendered elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer(usize);

impl Spacer {
    pub const DEFAULT: usize = 1;

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Spacer(Self::DEFAULT)
    }
}

impl From<usize> for Spacer {
    fn from(lines: usize) -> Self {
        Spacer(lines)
    }
}

impl TryFrom<i64> for Spacer {
    type Error = Error;

    fn try_from(lines: i64) -> Result<Self> {
        usize::try_from(lines)
            .map(Spacer)
            .map_err(|_| Error::InvalidArgument {
                name: "spacer".to_string(),
                reason: format!("must be zero or more, got {lines}"),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub include: Include,
    pub exclude: BTreeSet<Selector>,
    pub spacer: Spacer,
}

impl RenderOptions {
    /// Builds options from selector names and a raw spacer value.
    pub fn from_strs<S: AsRef<str>>(include: &[S], exclude: &[S], spacer: i64) -> Result<Self> {
        Ok(Self {
            include: Include::from_selectors(Selector::parse_all(include)?),
            exclude: Selector::parse_all(exclude)?,
            spacer: Spacer::try_from(spacer)?,
        })
    }

    /// Exclusion wins over inclusion.
    pub fn retains(&self, index: usize, element: &Element) -> bool {
        self.include.matches(index, element)
            && !self.exclude.iter().any(|s| s.matches(index, element))
    }

    /// The retained elements with their original positions.
    pub fn retained<'a>(
        &'a self,
        elements: &'a [Element],
    ) -> impl Iterator<Item = (usize, &'a Element)> + 'a {
        elements
            .iter()
            .enumerate()
            .filter(|(i, e)| self.retains(*i, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Code;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("all", Selector::All)]
    #[case("table", Selector::Kind(ElementKind::Table))]
    #[case("def_list", Selector::Kind(ElementKind::DefList))]
    #[case("headers", Selector::Kind(ElementKind::Header))]
    #[case("h3", Selector::HeaderLevel(3))]
    #[case(" 12 ", Selector::Position(12))]
    fn parses_selectors(#[case] input: &str, #[case] expected: Selector) {
        assert_eq!(input.parse::<Selector>().unwrap(), expected);
    }

    #[rstest]
    #[case("tables")]
    #[case("h7")]
    #[case("h0")]
    #[case("-1")]
    #[case("")]
    fn unknown_selector(#[case] input: &str) {
        match input.parse::<Selector>() {
            Err(Error::UnknownElementKind { name }) => assert_eq!(name, input),
            other => panic!("expected UnknownElementKind, got {other:?}"),
        }
    }

    #[test]
    fn display_parses_back() {
        for selector in [
            Selector::All,
            Selector::Kind(ElementKind::Blockquote),
            Selector::HeaderLevel(2),
            Selector::Position(4),
        ] {
            assert_eq!(selector.to_string().parse::<Selector>().unwrap(), selector);
        }
    }

    fn sample() -> Vec<Element> {
        vec![
            Element::header(1, "A"),
            Element::paragraph("text"),
            Element::header(2, "B"),
            Element::Code(Code::new(None, "x")),
        ]
    }

    #[test]
    fn select_keeps_document_order() {
        let selected = select(
            &sample(),
            &[Selector::Kind(ElementKind::Code), Selector::HeaderLevel(1)],
        );
        assert_eq!(
            selected,
            vec![Element::header(1, "A"), Element::Code(Code::new(None, "x"))]
        );
    }

    #[test]
    fn select_by_position() {
        assert_eq!(
            select(&sample(), &[Selector::Position(1)]),
            vec![Element::paragraph("text")]
        );
    }

    #[test]
    fn exclude_wins_over_include() {
        let options = RenderOptions::from_strs(&["headers", "paragraph"], &["h2"], 1).unwrap();
        let kept: Vec<usize> = options.retained(&sample()).map(|(i, _)| i).collect();
        assert_eq!(kept, vec![0, 1]);
    }

    #[test]
    fn exclude_all_removes_everything() {
        let options = RenderOptions::from_strs(&["table"], &["all"], 1).unwrap();
        assert_eq!(options.retained(&sample()).count(), 0);
    }

    #[test]
    fn include_all_or_nothing_means_everything() {
        let empty: [&str; 0] = [];
        assert_eq!(
            RenderOptions::from_strs(&empty, &empty, 0).unwrap().include,
            Include::All
        );
        assert_eq!(
            RenderOptions::from_strs(&["all", "table"], &empty, 0)
                .unwrap()
                .include,
            Include::All
        );
    }

    #[test]
    fn negative_spacer_is_invalid() {
        match Spacer::try_from(-1i64) {
            Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "spacer"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
        assert_eq!(Spacer::try_from(0i64).unwrap().get(), 0);
        assert_eq!(Spacer::default().get(), 1);
    }
}

use crate::models::MetaValue;

/// Front matter syntax: a `---` fenced block of `key: value` lines at the top
/// of a document.
pub struct FrontMatter;

impl FrontMatter {
    pub const DELIMITER: &'static str = "---";
    const QUOTES: [char; 2] = ['"', '\''];

    /// Only an unindented `---` with nothing after it opens or closes.
    pub fn is_delimiter(line: &str) -> bool {
        line == Self::DELIMITER
    }

    /// Splits `key: value` on the first colon. The key must not be blank.
    pub fn entry(line: &str) -> Option<(&str, &str)> {
        let (key, value) = line.split_once(':')?;
        let key = key.trim();
        (!key.is_empty()).then(|| (key, value.trim()))
    }

    /// Interprets a raw value.
    ///
    /// `[a, b]` and values with a comma outside quotes become lists of
    /// non-empty, unquoted items. Anything else is text with one pair of
    /// surrounding quotes removed.
    pub fn value(raw: &str) -> MetaValue {
        let raw = raw.trim();
        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            return MetaValue::List(Self::split_items(inner).0);
        }
        let (items, saw_comma) = Self::split_items(raw);
        if saw_comma {
            MetaValue::List(items)
        } else {
            MetaValue::Text(Self::unquote(raw).to_string())
        }
    }

    /// Formats a value so that [`FrontMatter::value`] reads it back unchanged.
    pub fn format_value(value: &MetaValue) -> String {
        match value {
            MetaValue::Text(text) if Self::needs_quotes(text) || text.starts_with('[') => {
                Self::quote(text)
            }
            MetaValue::Text(text) => text.clone(),
            MetaValue::List(items) => {
                let items: Vec<String> = items
                    .iter()
                    .map(|item| {
                        if Self::needs_quotes(item) {
                            Self::quote(item)
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                format!("[{}]", items.join(", "))
            }
        }
    }

    fn needs_quotes(s: &str) -> bool {
        s.contains(',')
            || s != s.trim()
            || s.starts_with(Self::QUOTES)
            || s.ends_with(Self::QUOTES)
    }

    fn quote(s: &str) -> String {
        let q = if s.contains('"') { '\'' } else { '"' };
        format!("{q}{s}{q}")
    }

    fn unquote(s: &str) -> &str {
        for q in Self::QUOTES {
            if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
                return &s[1..s.len() - 1];
            }
        }
        s
    }

    /// Splits on commas outside quotes. A quote only opens at the start of an item.
    fn split_items(s: &str) -> (Vec<String>, bool) {
        let mut items = vec![];
        let mut saw_comma = false;
        let mut current = String::new();
        let mut open_quote: Option<char> = None;

        for c in s.chars() {
            match open_quote {
                Some(q) if c == q => {
                    open_quote = None;
                    current.push(c);
                }
                Some(_) => current.push(c),
                None if c == ',' => {
                    saw_comma = true;
                    items.push(std::mem::take(&mut current));
                }
                None => {
                    if Self::QUOTES.contains(&c) && current.trim().is_empty() {
                        open_quote = Some(c);
                    }
                    current.push(c);
                }
            }
        }
        items.push(current);

        let items = items
            .iter()
            .map(|item| Self::unquote(item.trim()).to_string())
            .filter(|item| !item.is_empty())
            .collect();
        (items, saw_comma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("title: Hello", Some(("title", "Hello")))]
    #[case("url: http://x.io", Some(("url", "http://x.io")))]
    #[case("empty:", Some(("empty", "")))]
    #[case(": no key", None)]
    #[case("no colon", None)]
    fn splits_entries(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(FrontMatter::entry(input), expected);
    }

    #[rstest]
    #[case("plain", MetaValue::from("plain"))]
    #[case("\"quoted\"", MetaValue::from("quoted"))]
    #[case("'single'", MetaValue::from("single"))]
    #[case("\"a, b\"", MetaValue::from("a, b"))]
    #[case("[a, b]", MetaValue::from(vec!["a", "b"]))]
    #[case("[]", MetaValue::List(vec![]))]
    #[case("a, b ,c", MetaValue::from(vec!["a", "b", "c"]))]
    #[case("[\"x, y\", z]", MetaValue::from(vec!["x, y", "z"]))]
    #[case("a,", MetaValue::from(vec!["a"]))]
    #[case("don't stop", MetaValue::from("don't stop"))]
    fn interprets_values(#[case] input: &str, #[case] expected: MetaValue) {
        assert_eq!(FrontMatter::value(input), expected);
    }

    #[rstest]
    #[case(MetaValue::from("plain"))]
    #[case(MetaValue::from("a, b"))]
    #[case(MetaValue::from("[not a list]"))]
    #[case(MetaValue::from("\"already quoted\""))]
    #[case(MetaValue::from(" padded "))]
    #[case(MetaValue::from(""))]
    #[case(MetaValue::from(vec!["a", "b, c", "'q'"]))]
    #[case(MetaValue::List(vec![]))]
    fn formatted_values_read_back(#[case] value: MetaValue) {
        let formatted = FrontMatter::format_value(&value);
        assert_eq!(FrontMatter::value(&formatted), value, "formatted as {formatted:?}");
    }
}

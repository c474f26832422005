/// Thematic break syntax: a run of three or more `-`, `*` or `_`.
pub struct Separator;

impl Separator {
    const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        match t.chars().next() {
            Some(first @ ('-' | '*' | '_')) => {
                t.len() >= Self::MIN_LEN && t.chars().all(|c| c == first)
            }
            _ => false,
        }
    }
}

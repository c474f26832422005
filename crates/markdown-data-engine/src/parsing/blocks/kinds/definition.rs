/// Definition line syntax: `: definition` under a term line.
pub struct Definition;

impl Definition {
    pub const MARKER: &'static str = ": ";

    pub fn parse(line: &str) -> Option<&str> {
        line.trim_start().strip_prefix(Self::MARKER).map(str::trim)
    }
}

use std::collections::{HashMap, HashSet};

/// Hands out unique keys among one group of siblings.
///
/// The first request for a base keeps it bare; later requests get `2`, `3`, …
/// appended (`table`, `table2`). A generated key that collides with one already
/// handed out is skipped, so every returned key is unique within the group.
#[derive(Debug, Default)]
pub struct KeyDeduper {
    counts: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl KeyDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        loop {
            *count += 1;
            let candidate = if *count == 1 {
                base.to_string()
            } else {
                format!("{base}{count}")
            };
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

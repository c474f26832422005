/// A node that owns an ordered list of children of its own type.
pub trait Nested {
    fn adopt(&mut self, child: Self);
}

/// Builds a tree from a run of `(depth, node)` entries.
///
/// A new entry closes every open entry at the same or a greater depth, so a
/// strictly deeper entry becomes a child of the nearest shallower one.
/// Closed entries attach to the entry below them, or become roots.
#[derive(Debug)]
pub struct ContainerStack<T> {
    open: Vec<(usize, T)>,
    roots: Vec<T>,
}

impl<T: Nested> ContainerStack<T> {
    pub fn new() -> Self {
        Self {
            open: vec![],
            roots: vec![],
        }
    }

    pub fn push(&mut self, depth: usize, node: T) {
        while self.open.last().is_some_and(|(d, _)| *d >= depth) {
            self.close_top();
        }
        self.open.push((depth, node));
    }

    pub fn finish(mut self) -> Vec<T> {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.roots
    }

    fn close_top(&mut self) {
        if let Some((_, node)) = self.open.pop() {
            match self.open.last_mut() {
                Some((_, parent)) => parent.adopt(node),
                None => self.roots.push(node),
            }
        }
    }
}

impl<T: Nested> Default for ContainerStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::{Path, PathBuf};

/// Directories enclosing the line currently being resolved.
///
/// Index `0` is always the base path; index `i` is the directory opened by the last entry seen
/// at depth `i`. Files are never pushed since they cannot have children.
#[derive(Debug, Clone)]
pub struct AncestryStack {
    paths: Vec<PathBuf>,
}
impl AncestryStack {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![base.into()],
        }
    }
    /// Pops back to the parent of an entry at `depth`.
    ///
    /// Siblings and shallower lines return to their ancestor here. The base path is never
    /// popped, even for a depth of `0`.
    pub fn settle(&mut self, depth: usize) {
        while self.paths.len() > depth.max(1) {
            self.paths.pop();
        }
    }
    /// The directory new entries are resolved against.
    pub fn top(&self) -> &Path {
        // `paths` is never empty, see `settle`
        self.paths.last().map(PathBuf::as_path).unwrap_or(Path::new(""))
    }
    /// Joins `name` onto the current top.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.top().join(name)
    }
    pub fn push(&mut self, directory: PathBuf) {
        self.paths.push(directory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_holds_base() {
        let stack = AncestryStack::new("out");

        assert_eq!(stack.top(), Path::new("out"));
        assert_eq!(stack.resolve("a"), PathBuf::from("out/a"));
    }

    #[test]
    fn test_settle_pops_to_parent_depth() {
        let mut stack = AncestryStack::new("out");
        stack.push("out/a".into());
        stack.push("out/a/b".into());

        stack.settle(2);
        assert_eq!(stack.top(), Path::new("out/a"));

        stack.settle(1);
        assert_eq!(stack.top(), Path::new("out"));
    }

    #[test]
    fn test_settle_keeps_base() {
        let mut stack = AncestryStack::new("out");
        stack.push("out/a".into());

        stack.settle(0);
        assert_eq!(stack.top(), Path::new("out"));

        // nothing left to pop
        stack.settle(0);
        assert_eq!(stack.top(), Path::new("out"));
    }

    #[test]
    fn test_settle_deeper_than_stack_is_noop() {
        let mut stack = AncestryStack::new("out");
        stack.push("out/a".into());

        stack.settle(5);

        assert_eq!(stack.top(), Path::new("out/a"));
    }
}

use std::path::PathBuf;

use crate::{
    ancestry::AncestryStack,
    parser::{parse_line, EntryKind},
};

/// A directory or empty file staged for creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    /// Full path, rooted at the base path of the plan.
    pub destination: PathBuf,
    pub kind: EntryKind,
    /// 1-based line number in the input text.
    pub line: usize,
}
impl VirtualEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
/// Every entry an input tree describes, in input order, before anything is written to disk.
#[derive(Debug, Clone)]
pub struct VirtualFS {
    pub base: PathBuf,
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            entries: Vec::new(),
        }
    }
    /// Parses `text` line by line and resolves each entry against the ancestry stack.
    pub fn plan(text: &str, base: impl Into<PathBuf>) -> Self {
        let mut vfs = Self::new(base);
        let mut stack = AncestryStack::new(vfs.base.clone());

        for (index, raw) in text.split('\n').enumerate() {
            let Some(parsed) = parse_line(raw) else {
                continue;
            };

            stack.settle(parsed.depth);

            let destination = stack.resolve(&parsed.name);

            if parsed.kind == EntryKind::Directory {
                stack.push(destination.clone());
            }

            vfs.entries.push(VirtualEntry {
                destination,
                kind: parsed.kind,
                line: index + 1,
            });
        }

        vfs
    }
    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| !e.is_file())
    }
    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

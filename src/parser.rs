//! Line parser for the ASCII tree format.
//!
//! Every line is reduced to a [`ParsedLine`] without touching the filesystem. Depth is counted
//! in groups of [`INDENT_UNIT`] after tree glyphs have been replaced by blank filler, so trees
//! drawn with any other indent width parse to an unintended depth without raising an error.

/// Everything from this character to the end of the line is ignored.
pub const COMMENT_MARKER: char = '#';

/// A name ending with this character is a directory.
pub const DIRECTORY_MARKER: char = '/';

/// One level of nesting.
pub const INDENT_UNIT: &str = "    ";

/// Tree-drawing tokens and the blank filler each one is replaced with.
///
/// The two connectors are three characters wide and the two bars are one, so a drawn tree
/// lines up with [`INDENT_UNIT`] once the glyphs are gone.
pub const GLYPHS: [(&str, &str); 4] = [("├──", "   "), ("└──", "   "), ("│", " "), ("|", " ")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Nesting level, `1` for entries directly under the base path.
    pub depth: usize,
    /// Entry name with the directory marker removed.
    pub name: String,
    pub kind: EntryKind,
}

/// Drops the comment suffix and any trailing whitespace.
pub fn strip_comment(raw: &str) -> &str {
    let content = match raw.find(COMMENT_MARKER) {
        Some(index) => &raw[..index],
        None => raw,
    };

    content.trim_end()
}

/// Parses a single line, returning `None` for lines that are blank once the comment is gone.
pub fn parse_line(raw: &str) -> Option<ParsedLine> {
    let line = strip_comment(raw);

    if line.trim_start().is_empty() {
        return None;
    }

    let mut flattened = line.to_string();
    for (glyph, filler) in GLYPHS {
        flattened = flattened.replace(glyph, filler);
    }

    let segments: Vec<&str> = flattened.split(INDENT_UNIT).collect();
    let depth = segments.len();
    let last = segments.last().copied().unwrap_or_default().trim();

    let (name, kind) = match last.strip_suffix(DIRECTORY_MARKER) {
        Some(stripped) => (stripped, EntryKind::Directory),
        None => (last, EntryKind::File),
    };

    log::debug!("parsed {:?} as {:?} '{}' at depth {}", raw, kind, name, depth);

    Some(ParsedLine {
        depth,
        name: name.to_string(),
        kind,
    })
}

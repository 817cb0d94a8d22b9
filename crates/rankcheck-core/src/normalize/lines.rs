//! Raw graph line classification
//!
//! Raw graph files interleave node blocks and edge blocks, separated by
//! marker lines. The scanner carries an explicit [`Section`] mode through the
//! file instead of mutable flag state: [`classify`] is folded over the lines,
//! yielding the mode in effect after each line together with the line's
//! class.

/// Marker character; such lines toggle between node-listing and edge-listing
/// mode.
pub const SECTION_MARKER: char = '*';

/// Comment character; such lines are ignored in both modes.
pub const COMMENT_MARKER: char = '#';

/// Which block of a raw graph file the scanner is currently inside.
///
/// Content before the first marker is edge-listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    EdgeList,
    NodeList,
}

impl Section {
    /// The mode in effect after crossing a section marker.
    pub fn toggled(self) -> Self {
        match self {
            Section::EdgeList => Section::NodeList,
            Section::NodeList => Section::EdgeList,
        }
    }
}

/// How a single raw line is treated under the current section mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Section marker; flips the mode and carries no data.
    Marker,
    /// Comment; skipped unconditionally.
    Comment,
    /// Node declaration; skipped, never parsed.
    NodeEntry,
    /// Edge declaration; the only lines that carry graph data.
    Edge,
}

/// Classify one raw line and advance the section mode.
///
/// Markers are recognized before comments, so a `*` line inside a node block
/// still closes it. Classification looks at the raw first character; leading
/// whitespace is not stripped.
pub fn classify(line: &str, section: Section) -> (Section, LineClass) {
    if line.starts_with(SECTION_MARKER) {
        return (section.toggled(), LineClass::Marker);
    }
    if line.starts_with(COMMENT_MARKER) {
        return (section, LineClass::Comment);
    }
    match section {
        Section::NodeList => (section, LineClass::NodeEntry),
        Section::EdgeList => (section, LineClass::Edge),
    }
}

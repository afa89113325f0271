use std::fmt;
use std::num::NonZeroUsize;

use memchr::memchr2;

use shrike_text_size::{TextRange, TextSize};

/// Index of the start offset of every line in a file, for translating byte
/// offsets into user-facing line and column numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Build the index for `text`. Handles `\n`, `\r\n`, and lone `\r`
    /// terminators.
    pub fn from_source_text(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![TextSize::default()];
        let mut position = 0;
        while let Some(index) = memchr2(b'\n', b'\r', &bytes[position..]) {
            let terminator = position + index;
            position = if bytes[terminator] == b'\r' && bytes.get(terminator + 1) == Some(&b'\n')
            {
                terminator + 2
            } else {
                terminator + 1
            };
            line_starts.push(TextSize::try_from(position).unwrap());
        }
        Self { line_starts }
    }

    /// The one-indexed line on which `offset` falls.
    pub fn line_index(&self, offset: TextSize) -> OneIndexed {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        OneIndexed::from_zero_indexed(line.saturating_sub(1))
    }

    /// The one-indexed line and column of `offset` within `text` (the text
    /// the index was built from). Columns count characters, not bytes.
    pub fn source_location(&self, offset: TextSize, text: &str) -> SourceLocation {
        let row = self.line_index(offset);
        let line_start = self.line_starts[row.to_zero_indexed()];
        let up_to = TextRange::new(line_start, offset);
        let column = text[usize::from(up_to.start())..usize::from(up_to.end())]
            .chars()
            .count();
        SourceLocation {
            row,
            column: OneIndexed::from_zero_indexed(column),
        }
    }
}

/// A line or column number, displayed starting at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    pub fn from_zero_indexed(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn to_zero_indexed(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A one-indexed line and column within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub row: OneIndexed,
    pub column: OneIndexed,
}

#[cfg(test)]
mod tests {
    use shrike_text_size::TextSize;

    use super::{LineIndex, OneIndexed};

    #[test]
    fn line_index() {
        let index = LineIndex::from_source_text("a\nbc\r\nd");
        assert_eq!(index.line_index(TextSize::from(0)), OneIndexed::from_zero_indexed(0));
        assert_eq!(index.line_index(TextSize::from(2)), OneIndexed::from_zero_indexed(1));
        assert_eq!(index.line_index(TextSize::from(3)), OneIndexed::from_zero_indexed(1));
        assert_eq!(index.line_index(TextSize::from(6)), OneIndexed::from_zero_indexed(2));
    }

    #[test]
    fn source_location() {
        let text = "import a;\nimport b;\n";
        let index = LineIndex::from_source_text(text);
        let location = index.source_location(TextSize::from(17), text);
        assert_eq!(location.row.get(), 2);
        assert_eq!(location.column.get(), 8);
    }

    #[test]
    fn multibyte_column() {
        let text = "const s = '\u{00e9}\u{00e9}';\nimport a;";
        let index = LineIndex::from_source_text(text);
        let offset = TextSize::try_from(text.find("import").unwrap()).unwrap();
        let location = index.source_location(offset, text);
        assert_eq!(location.row.get(), 2);
        assert_eq!(location.column.get(), 1);
    }
}

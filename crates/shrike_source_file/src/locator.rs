use memchr::{memchr2, memrchr2};

use shrike_text_size::{Ranged, TextLen, TextRange, TextSize};

/// Wrapper around a source file's contents with cheap access to line
/// boundaries and range slices.
pub struct Locator<'a> {
    contents: &'a str,
}

impl<'a> Locator<'a> {
    pub const fn new(contents: &'a str) -> Self {
        Self { contents }
    }

    /// The underlying file contents.
    pub const fn contents(&self) -> &'a str {
        self.contents
    }

    pub fn text_len(&self) -> TextSize {
        self.contents.text_len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// The verbatim slice of the file covered by `ranged`.
    pub fn slice<T: Ranged>(&self, ranged: T) -> &'a str {
        let range = ranged.range();
        &self.contents[usize::from(range.start())..usize::from(range.end())]
    }

    /// The offset of the start of the line on which `offset` falls.
    pub fn line_start(&self, offset: TextSize) -> TextSize {
        let before = &self.contents.as_bytes()[..usize::from(offset)];
        match memrchr2(b'\n', b'\r', before) {
            Some(index) => TextSize::try_from(index + 1).unwrap(),
            None => TextSize::default(),
        }
    }

    /// The offset of the end of the line on which `offset` falls, up to but
    /// not including the line terminator.
    pub fn line_end(&self, offset: TextSize) -> TextSize {
        let after = &self.contents.as_bytes()[usize::from(offset)..];
        match memchr2(b'\n', b'\r', after) {
            Some(index) => offset + TextSize::try_from(index).unwrap(),
            None => self.text_len(),
        }
    }

    /// The offset one past the terminator of the line on which `offset`
    /// falls. `\r\n` counts as a single terminator.
    pub fn full_line_end(&self, offset: TextSize) -> TextSize {
        let after = &self.contents.as_bytes()[usize::from(offset)..];
        match memchr2(b'\n', b'\r', after) {
            Some(index) => {
                let skip = if after[index] == b'\r' && after.get(index + 1) == Some(&b'\n') {
                    index + 2
                } else {
                    index + 1
                };
                offset + TextSize::try_from(skip).unwrap()
            }
            None => self.text_len(),
        }
    }

    /// The full line on which `offset` falls, including its terminator.
    pub fn full_line(&self, offset: TextSize) -> &'a str {
        self.slice(TextRange::new(self.line_start(offset), self.full_line_end(offset)))
    }

    /// Returns `true` if `range` spans at least one line terminator.
    pub fn contains_line_break(&self, range: TextRange) -> bool {
        memchr2(b'\n', b'\r', self.slice(range).as_bytes()).is_some()
    }

    /// The number of line terminators within `range`, counting `\r\n` as one.
    pub fn count_lines<T: Ranged>(&self, ranged: T) -> usize {
        let bytes = self.slice(ranged.range()).as_bytes();
        let mut count = 0;
        let mut position = 0;
        while let Some(index) = memchr2(b'\n', b'\r', &bytes[position..]) {
            count += 1;
            let terminator = position + index;
            position = if bytes[terminator] == b'\r' && bytes.get(terminator + 1) == Some(&b'\n')
            {
                terminator + 2
            } else {
                terminator + 1
            };
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use shrike_text_size::{TextRange, TextSize};

    use super::Locator;

    #[test]
    fn line_boundaries() {
        let locator = Locator::new("first\nsecond\r\nthird");

        assert_eq!(locator.line_start(TextSize::from(0)), TextSize::from(0));
        assert_eq!(locator.line_start(TextSize::from(3)), TextSize::from(0));
        assert_eq!(locator.line_start(TextSize::from(8)), TextSize::from(6));
        assert_eq!(locator.line_start(TextSize::from(15)), TextSize::from(14));

        assert_eq!(locator.line_end(TextSize::from(0)), TextSize::from(5));
        assert_eq!(locator.line_end(TextSize::from(8)), TextSize::from(12));
        assert_eq!(locator.line_end(TextSize::from(15)), TextSize::from(19));

        assert_eq!(locator.full_line_end(TextSize::from(0)), TextSize::from(6));
        assert_eq!(locator.full_line_end(TextSize::from(8)), TextSize::from(14));
        assert_eq!(locator.full_line(TextSize::from(8)), "second\r\n");
    }

    #[test]
    fn count_lines() {
        let locator = Locator::new("a\nb\r\nc\rd");
        assert_eq!(locator.count_lines(TextRange::new(0.into(), 8.into())), 3);
        assert_eq!(locator.count_lines(TextRange::new(0.into(), 2.into())), 1);
        assert_eq!(locator.count_lines(TextRange::new(0.into(), 1.into())), 0);
    }

    #[test]
    fn slices() {
        let locator = Locator::new("import a from 'a';\n");
        let range = TextRange::new(TextSize::from(7), TextSize::from(8));
        assert_eq!(locator.slice(range), "a");
        assert!(!locator.contains_line_break(range));
        assert!(locator.contains_line_break(TextRange::new(0.into(), locator.text_len())));
    }
}

//! A tolerant, single-pass scanner for top-level `import` declarations.
//!
//! The scanner walks the raw source text, skipping comments, string literals,
//! and template literals, and extracts every declaration that starts with the
//! `import` keyword in statement position. It is not a JavaScript parser:
//! declarations it cannot make sense of are skipped rather than reported, and
//! exotic constructs elsewhere in the file (such as regular-expression
//! literals containing quotes) can cause unrelated code to be skipped over.
//! That is sufficient here: the scanner's job is to find import headers, and
//! it never needs to understand the code between them.

use shrike_text_size::{TextRange, TextSize};

use crate::{Binding, BindingKind, ImportStatement};

/// Extract the import declarations of `source`, in source order.
pub fn parse_imports(source: &str) -> Vec<ImportStatement> {
    Scanner::new(source).scan()
}

struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            offset: 0,
        }
    }

    fn scan(mut self) -> Vec<ImportStatement> {
        let mut statements = Vec::new();
        // An `import` keyword only opens a declaration in statement position:
        // at the start of the file, or after a line break, `;`, or `}`.
        let mut at_statement_start = true;
        while self.offset < self.bytes.len() {
            match self.bytes[self.offset] {
                b' ' | b'\t' => self.offset += 1,
                b'\n' | b'\r' | b';' | b'}' => {
                    self.offset += 1;
                    at_statement_start = true;
                }
                b'/' if self.bytes.get(self.offset + 1) == Some(&b'/') => {
                    self.skip_line_comment();
                }
                b'/' if self.bytes.get(self.offset + 1) == Some(&b'*') => {
                    self.skip_block_comment();
                }
                b'\'' | b'"' => {
                    let _ = self.read_string();
                    at_statement_start = false;
                }
                b'`' => {
                    self.skip_template();
                    at_statement_start = false;
                }
                byte => {
                    if at_statement_start && self.at_keyword(b"import") {
                        if let Some(statement) = self.parse_import() {
                            statements.push(statement);
                        } else {
                            at_statement_start = false;
                        }
                        // Either way the parser advanced; re-dispatch from
                        // the new offset.
                        continue;
                    }
                    at_statement_start = false;
                    self.offset += char_width(byte);
                }
            }
        }
        statements
    }

    fn parse_import(&mut self) -> Option<ImportStatement> {
        let start = self.offset;
        self.offset += "import".len();
        self.skip_trivia();

        let mut bindings = Vec::new();
        let mut is_type_only = false;

        match self.peek()? {
            // Dynamic `import(...)` and `import.meta` are expressions.
            b'(' | b'.' => return None,
            b'\'' | b'"' => {
                // Side-effect import: no bindings, no `from` clause.
                let (module_path, _) = self.read_string()?;
                let end = self.consume_semicolon();
                return Some(ImportStatement {
                    module_path,
                    bindings,
                    is_type_only,
                    range: text_range(start, end),
                });
            }
            _ => {}
        }

        // TypeScript `import type` marker. `type` binds as an ordinary
        // default import when followed by `from` or `,`.
        if self.at_keyword(b"type") {
            let checkpoint = self.offset;
            self.read_ident()?;
            self.skip_trivia();
            let opens_clause = match self.peek() {
                Some(b'{' | b'*') => true,
                Some(byte) if is_ident_start_byte(byte) => !self.at_keyword(b"from"),
                _ => false,
            };
            if opens_clause {
                is_type_only = true;
            } else {
                self.offset = checkpoint;
            }
        }

        match self.peek()? {
            b'{' => self.parse_named_bindings(&mut bindings)?,
            b'*' => bindings.push(self.parse_namespace_binding()?),
            byte if is_ident_start_byte(byte) => {
                let (local_name, range) = self.read_ident()?;
                bindings.push(Binding {
                    kind: BindingKind::Default,
                    local_name,
                    range,
                });
                self.skip_trivia();
                if self.peek() == Some(b',') {
                    self.offset += 1;
                    self.skip_trivia();
                    match self.peek()? {
                        b'{' => self.parse_named_bindings(&mut bindings)?,
                        b'*' => bindings.push(self.parse_namespace_binding()?),
                        _ => return None,
                    }
                }
            }
            _ => return None,
        }

        self.skip_trivia();
        if !self.at_keyword(b"from") {
            return None;
        }
        self.read_ident()?;
        self.skip_trivia();
        match self.peek()? {
            b'\'' | b'"' => {}
            _ => return None,
        }
        let (module_path, _) = self.read_string()?;
        let end = self.consume_semicolon();

        Some(ImportStatement {
            module_path,
            bindings,
            is_type_only,
            range: text_range(start, end),
        })
    }

    /// Parse `{ a, b as c, type d }`, pushing one binding per specifier.
    fn parse_named_bindings(&mut self, bindings: &mut Vec<Binding>) -> Option<()> {
        self.offset += 1; // '{'
        loop {
            self.skip_trivia();
            match self.peek()? {
                b'}' => {
                    self.offset += 1;
                    return Some(());
                }
                b',' => self.offset += 1,
                _ => bindings.push(self.parse_named_specifier()?),
            }
        }
    }

    /// Parse one specifier up to the next `,` or `}`. The local name is the
    /// last token: `b` for `a as b`, `d` for `type d`.
    fn parse_named_specifier(&mut self) -> Option<Binding> {
        let mut first_start: Option<usize> = None;
        let mut last: Option<(String, usize)> = None;
        loop {
            self.skip_trivia();
            match self.peek()? {
                b',' | b'}' => break,
                b'\'' | b'"' => {
                    let token_start = self.offset;
                    let (value, range) = self.read_string()?;
                    first_start.get_or_insert(token_start);
                    last = Some((value, usize::from(range.end())));
                }
                byte if is_ident_start_byte(byte) => {
                    let token_start = self.offset;
                    let (name, range) = self.read_ident()?;
                    first_start.get_or_insert(token_start);
                    last = Some((name, usize::from(range.end())));
                }
                _ => return None,
            }
        }
        let start = first_start?;
        let (local_name, end) = last?;
        Some(Binding {
            kind: BindingKind::Named,
            local_name,
            range: text_range(start, end),
        })
    }

    /// Parse `* as name`.
    fn parse_namespace_binding(&mut self) -> Option<Binding> {
        let start = self.offset;
        self.offset += 1; // '*'
        self.skip_trivia();
        if !self.at_keyword(b"as") {
            return None;
        }
        self.read_ident()?;
        self.skip_trivia();
        let (local_name, range) = self.read_ident()?;
        Some(Binding {
            kind: BindingKind::Namespace,
            local_name,
            range: text_range(start, usize::from(range.end())),
        })
    }

    /// Extend the statement over a directly following semicolon, allowing
    /// only plain spacing before it. Returns the statement's end offset.
    fn consume_semicolon(&mut self) -> usize {
        let mut lookahead = self.offset;
        while matches!(self.bytes.get(lookahead), Some(b' ' | b'\t')) {
            lookahead += 1;
        }
        if self.bytes.get(lookahead) == Some(&b';') {
            self.offset = lookahead + 1;
        }
        self.offset
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    /// Returns `true` if `word` starts at the current offset and ends on an
    /// identifier boundary.
    fn at_keyword(&self, word: &[u8]) -> bool {
        self.bytes[self.offset..].starts_with(word)
            && !self
                .bytes
                .get(self.offset + word.len())
                .copied()
                .is_some_and(is_ident_continue_byte)
    }

    fn read_ident(&mut self) -> Option<(String, TextRange)> {
        let start = self.offset;
        let rest = &self.source[self.offset..];
        let mut chars = rest.chars();
        let first = chars.next()?;
        if !is_ident_start(first) {
            return None;
        }
        let mut len = first.len_utf8();
        for c in chars {
            if is_ident_continue(c) {
                len += c.len_utf8();
            } else {
                break;
            }
        }
        self.offset += len;
        Some((rest[..len].to_string(), text_range(start, self.offset)))
    }

    /// Read a single- or double-quoted string literal, returning its value
    /// (without quotes) and its full range. Fails on an unterminated literal,
    /// leaving the offset at the line terminator or end of file.
    fn read_string(&mut self) -> Option<(String, TextRange)> {
        let start = self.offset;
        let quote = self.bytes[self.offset];
        self.offset += 1;
        loop {
            let byte = self.peek()?;
            match byte {
                b'\\' => self.offset += 2,
                b'\n' | b'\r' => return None,
                _ if byte == quote => {
                    let value = self.source[start + 1..self.offset].to_string();
                    self.offset += 1;
                    return Some((value, text_range(start, self.offset)));
                }
                _ => self.offset += 1,
            }
        }
    }

    fn skip_template(&mut self) {
        self.offset += 1; // '`'
        while let Some(byte) = self.peek() {
            match byte {
                b'\\' => self.offset += 2,
                b'`' => {
                    self.offset += 1;
                    return;
                }
                _ => self.offset += 1,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        // Leave the terminator in place so the main loop sees the line break.
        while let Some(byte) = self.peek() {
            if matches!(byte, b'\n' | b'\r') {
                return;
            }
            self.offset += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.offset += 2; // "/*"
        while self.offset < self.bytes.len() {
            if self.bytes[self.offset..].starts_with(b"*/") {
                self.offset += 2;
                return;
            }
            self.offset += 1;
        }
    }

    /// Skip whitespace (including line breaks) and comments between the
    /// tokens of a declaration.
    fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.offset += 1,
                b'/' if self.bytes.get(self.offset + 1) == Some(&b'/') => {
                    self.skip_line_comment();
                }
                b'/' if self.bytes.get(self.offset + 1) == Some(&b'*') => {
                    self.skip_block_comment();
                }
                _ => return,
            }
        }
    }
}

fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(
        TextSize::try_from(start).unwrap(),
        TextSize::try_from(end).unwrap(),
    )
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_ident_start_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$' || byte >= 0x80
}

fn is_ident_continue_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte >= 0x80
}

/// The width in bytes of the UTF-8 character starting with `byte`.
fn char_width(byte: u8) -> usize {
    match byte {
        0xF0.. => 4,
        0xE0.. => 3,
        0xC0.. => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use shrike_text_size::Ranged;

    use crate::BindingKind;

    use super::parse_imports;

    fn statement_texts<'a>(source: &'a str) -> Vec<&'a str> {
        parse_imports(source)
            .iter()
            .map(|statement| {
                &source[usize::from(statement.start())..usize::from(statement.end())]
            })
            .collect()
    }

    #[test]
    fn default_import() {
        let source = "import foo from 'mod';\n";
        let statements = parse_imports(source);
        assert_eq!(statements.len(), 1);
        let statement = &statements[0];
        assert_eq!(statement.module_path, "mod");
        assert!(!statement.is_type_only);
        assert_eq!(statement.bindings.len(), 1);
        assert_eq!(statement.bindings[0].kind, BindingKind::Default);
        assert_eq!(statement.bindings[0].local_name, "foo");
        assert_eq!(statement_texts(source), vec!["import foo from 'mod';"]);
    }

    #[test]
    fn side_effect_import() {
        let statements = parse_imports("import './polyfill.js';\n");
        assert_eq!(statements.len(), 1);
        assert!(statements[0].bindings.is_empty());
        assert_eq!(statements[0].module_path, "./polyfill.js");
    }

    #[test]
    fn namespace_import() {
        let source = "import * as fs from \"fs\"\n";
        let statements = parse_imports(source);
        assert_eq!(statements.len(), 1);
        let binding = &statements[0].bindings[0];
        assert_eq!(binding.kind, BindingKind::Namespace);
        assert_eq!(binding.local_name, "fs");
        // No semicolon: the statement ends at the closing quote.
        assert_eq!(statement_texts(source), vec!["import * as fs from \"fs\""]);
    }

    #[test]
    fn named_imports_with_aliases() {
        let source = "import { a, b as c, type d } from 'mod';";
        let statements = parse_imports(source);
        let statement = &statements[0];
        assert!(!statement.is_type_only);
        let names: Vec<&str> = statement
            .bindings
            .iter()
            .map(|binding| binding.local_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert!(statement.bindings.iter().all(|binding| binding.kind == BindingKind::Named));
        // Specifier ranges span the whole specifier, including `as` clauses.
        let spans: Vec<&str> = statement
            .bindings
            .iter()
            .map(|binding| &source[usize::from(binding.start())..usize::from(binding.end())])
            .collect();
        assert_eq!(spans, vec!["a", "b as c", "type d"]);
    }

    #[test]
    fn default_and_named() {
        let statements = parse_imports("import def, { a, b } from 'mod';");
        let statement = &statements[0];
        assert_eq!(statement.bindings.len(), 3);
        assert_eq!(statement.bindings[0].kind, BindingKind::Default);
        assert_eq!(statement.bindings[1].kind, BindingKind::Named);
        assert_eq!(statement.bindings[0].local_name, "def");
    }

    #[test]
    fn type_only_imports() {
        let statements = parse_imports("import type foo from 'foo';\nimport type { T } from 't';\n");
        assert_eq!(statements.len(), 2);
        assert!(statements[0].is_type_only);
        assert_eq!(statements[0].bindings[0].local_name, "foo");
        assert!(statements[1].is_type_only);
        assert_eq!(statements[1].bindings[0].local_name, "T");
    }

    #[test]
    fn type_as_default_binding() {
        // `type` here is a plain default import named `type`.
        let statements = parse_imports("import type from 'mod';\n");
        assert_eq!(statements.len(), 1);
        assert!(!statements[0].is_type_only);
        assert_eq!(statements[0].bindings[0].local_name, "type");
        assert_eq!(statements[0].bindings[0].kind, BindingKind::Default);
    }

    #[test]
    fn skips_non_declaration_uses() {
        let source = "\
const mod = import('dynamic');
// import commented from 'out';
const text = 'import fake from \"nope\";';
import real from 'real';
";
        let statements = parse_imports(source);
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].module_path, "real");
    }

    #[test]
    fn import_meta_is_not_a_declaration() {
        assert!(parse_imports("import.meta.url;\n").is_empty());
    }

    #[test]
    fn multiple_statements_on_one_line() {
        let source = "import b from 'b'; import a from 'a';\n";
        assert_eq!(
            statement_texts(source),
            vec!["import b from 'b';", "import a from 'a';"]
        );
    }

    #[test]
    fn comments_inside_braces_are_tolerated() {
        let source = "import { b, /* keep */ a } from 'mod';\n";
        let statements = parse_imports(source);
        let names: Vec<&str> = statements[0]
            .bindings
            .iter()
            .map(|binding| binding.local_name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn malformed_declaration_is_skipped() {
        let source = "import { from 'broken\nimport ok from 'ok';\n";
        let statements = parse_imports(source);
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].module_path, "ok");
    }

    #[test]
    fn multiline_named_imports() {
        let source = "import {\n  b,\n  a,\n} from 'mod';\n";
        let statements = parse_imports(source);
        let statement = &statements[0];
        assert_eq!(statement.bindings.len(), 2);
        assert_eq!(statement.bindings[0].local_name, "b");
        assert_eq!(statement_texts(source), vec!["import {\n  b,\n  a,\n} from 'mod';"]);
    }
}

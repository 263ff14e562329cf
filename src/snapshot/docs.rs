// Strict decoder for the `Representative_Docs` column.
//
// The topic model writes each topic's documents as a list literal of quoted
// strings, e.g. `['first doc', "it's the second"]`. Only that shape is
// accepted: a bracketed, comma-separated list of single- or double-quoted
// strings with the usual backslash escapes. Anything else is an error the
// caller turns into an empty document list.

use anyhow::{bail, Context, Result};

/// Decode a list literal of strings.
pub fn parse_doc_list(field: &str) -> Result<Vec<String>> {
    let mut parser = Parser {
        chars: field.trim().chars().collect(),
        pos: 0,
    };
    let docs = parser.list()?;
    parser.skip_ws();
    if parser.pos != parser.chars.len() {
        bail!("unexpected trailing input at offset {}", parser.pos);
    }
    Ok(docs)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => bail!("expected '{want}' at offset {}, found '{c}'", self.pos - 1),
            None => bail!("expected '{want}', found end of input"),
        }
    }

    fn list(&mut self) -> Result<Vec<String>> {
        self.skip_ws();
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_ws();
            match self.peek() {
                Some(']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(_) => {
                    items.push(self.string()?);
                    self.skip_ws();
                    match self.bump() {
                        Some(',') => continue,
                        Some(']') => return Ok(items),
                        Some(c) => bail!("expected ',' or ']' at offset {}, found '{c}'", self.pos - 1),
                        None => bail!("unterminated list"),
                    }
                }
                None => bail!("unterminated list"),
            }
        }
    }

    fn string(&mut self) -> Result<String> {
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => bail!("expected a quoted string at offset {}, found '{c}'", self.pos - 1),
            None => bail!("expected a quoted string, found end of input"),
        };

        let mut out = String::new();
        loop {
            match self.bump() {
                None => bail!("unterminated string literal"),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => self.escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<()> {
        let c = self.bump().context("dangling backslash")?;
        match c {
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '0' => out.push('\0'),
            // line continuation
            '\n' => {}
            'x' => out.push(self.hex_char(2)?),
            'u' => out.push(self.hex_char(4)?),
            'U' => out.push(self.hex_char(8)?),
            // unknown escapes keep the backslash, as the writer's repr does
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_char(&mut self, digits: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..digits {
            let d = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .context("invalid hex escape")?;
            code = code * 16 + d;
        }
        char::from_u32(code).with_context(|| format!("invalid code point U+{code:X}"))
    }
}

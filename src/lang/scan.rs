use super::token::{Operator, Tag, Token};
use super::Column;

/// Scan source text into tokens. The returned list always ends with a
/// single `Eof` token, so a parser can rely on one being present.
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r'
}

fn is_string_char(b: u8) -> bool {
    b == b' ' || b == b'!' || (b'#'..=b'~').contains(&b)
}

/// An iterator of tokens over one source text. Malformed lexemes come
/// out tagged `Invalid` rather than stopping the scan; a later stage
/// reports them when it trips over one.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    eof: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            eof: false,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn single(&mut self, tag: Tag) -> Token {
        let start = self.pos;
        self.pos += 1;
        Token::new(tag, start..self.pos)
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }
        // The whole digit run must fit a 16-bit signed value.
        let tag = match self.source[start..self.pos].parse::<i16>() {
            Ok(_) => Tag::Number,
            Err(_) => Tag::Invalid,
        };
        Token::new(tag, start..self.pos)
    }

    fn string(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        let mut valid = true;
        loop {
            match self.peek() {
                Some(b'"') => {
                    self.pos += 1;
                    let tag = if valid { Tag::String } else { Tag::Invalid };
                    return Token::new(tag, start..self.pos);
                }
                None | Some(b'\n') => return Token::new(Tag::Invalid, start..self.pos),
                Some(b) => {
                    if !is_string_char(b) {
                        valid = false;
                    }
                    self.pos += 1;
                }
            }
        }
    }

    fn word(&mut self) -> Option<Token> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !b.is_ascii_uppercase() {
                break;
            }
            self.pos += 1;
        }
        let word = &self.source[start..self.pos];
        if word == "REM" {
            // Discard the remark text but not the newline, so the
            // line still ends with its Eol token.
            while let Some(b) = self.peek() {
                if b == b'\n' {
                    break;
                }
                self.pos += 1;
            }
            return None;
        }
        let tag = match Tag::from_word(word) {
            Some(tag) => tag,
            None if word.len() == 1 => Tag::Var,
            None => Tag::Invalid,
        };
        Some(Token::new(tag, start..self.pos))
    }

    fn relation(&mut self, first: u8) -> Token {
        let start = self.pos;
        self.pos += 1;
        let operator = if first == b'<' {
            match self.peek() {
                Some(b'=') => {
                    self.pos += 1;
                    Operator::LessEqual
                }
                Some(b'>') => {
                    self.pos += 1;
                    Operator::NotEqual
                }
                _ => Operator::Less,
            }
        } else {
            match self.peek() {
                Some(b'=') => {
                    self.pos += 1;
                    Operator::GreaterEqual
                }
                Some(b'<') => {
                    self.pos += 1;
                    Operator::NotEqual
                }
                _ => Operator::Greater,
            }
        };
        Token::new(Tag::Operator(operator), start..self.pos)
    }

    fn other(&mut self) -> Token {
        let start = self.pos;
        let width = match self.source[start..].chars().next() {
            Some(c) => c.len_utf8(),
            None => {
                debug_assert!(false, "scanned past the end of the source");
                1
            }
        };
        self.pos += width;
        Token::new(Tag::Invalid, start..self.pos)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let b = match self.peek() {
                Some(b) => b,
                None => {
                    if self.eof {
                        return None;
                    }
                    self.eof = true;
                    return Some(Token::new(Tag::Eof, self.pos..self.pos));
                }
            };
            if is_space(b) {
                self.pos += 1;
                continue;
            }
            return Some(match b {
                b'\n' => self.single(Tag::Eol),
                b'0'..=b'9' => self.number(),
                b'"' => self.string(),
                b'A'..=b'Z' => match self.word() {
                    Some(token) => token,
                    None => continue,
                },
                b'<' | b'>' => self.relation(b),
                b',' => self.single(Tag::Comma),
                b'(' => self.single(Tag::LParen),
                b')' => self.single(Tag::RParen),
                b'=' => self.single(Tag::Operator(Operator::Equal)),
                b'+' => self.single(Tag::Operator(Operator::Plus)),
                b'-' => self.single(Tag::Operator(Operator::Minus)),
                b'*' => self.single(Tag::Operator(Operator::Multiply)),
                b'/' => self.single(Tag::Operator(Operator::Divide)),
                _ => self.other(),
            });
        }
    }
}

/// Render the source line holding `column` with a marker underneath:
/// a caret for a single character, a tilde run for a longer token.
pub fn annotate(source: &str, column: &Column) -> String {
    let at = column.start.min(source.len());
    let start = match source[..at].rfind('\n') {
        Some(n) => n + 1,
        None => 0,
    };
    let end = match source[start..].find('\n') {
        Some(n) => start + n,
        None => source.len(),
    };
    let line = &source[start..end];
    let offset = line[..at - start].chars().count();
    let width = source[at..column.end.min(end).max(at)].chars().count();
    let marker = if width > 1 {
        "~".repeat(width)
    } else {
        "^".to_string()
    };
    format!("{}\n{:offset$}{}", line, "", marker, offset = offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::{Func, Word};

    fn tags(source: &str) -> Vec<Tag> {
        scan(source).iter().map(|token| token.tag).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(tags(""), vec![Tag::Eof]);
        assert_eq!(tags("  \t\r"), vec![Tag::Eof]);
    }

    #[test]
    fn test_words() {
        assert_eq!(
            tags("PRINT A ABS FOO"),
            vec![
                Tag::Word(Word::Print),
                Tag::Var,
                Tag::Func(Func::Abs),
                Tag::Invalid,
                Tag::Eof
            ]
        );
    }

    #[test]
    fn test_relations() {
        assert_eq!(
            tags("< <= <> >< >= >"),
            vec![
                Tag::Operator(Operator::Less),
                Tag::Operator(Operator::LessEqual),
                Tag::Operator(Operator::NotEqual),
                Tag::Operator(Operator::NotEqual),
                Tag::Operator(Operator::GreaterEqual),
                Tag::Operator(Operator::Greater),
                Tag::Eof
            ]
        );
    }

    #[test]
    fn test_number_range() {
        assert_eq!(tags("32767"), vec![Tag::Number, Tag::Eof]);
        assert_eq!(tags("32768"), vec![Tag::Invalid, Tag::Eof]);
        assert_eq!(tags("0"), vec![Tag::Number, Tag::Eof]);
    }

    #[test]
    fn test_remark() {
        assert_eq!(
            tags("10 REM ignore ALL of this\n20"),
            vec![Tag::Number, Tag::Eol, Tag::Number, Tag::Eof]
        );
        assert_eq!(tags("REM runs to the end"), vec![Tag::Eof]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(tags("\"Hi there!\""), vec![Tag::String, Tag::Eof]);
        assert_eq!(tags("\"no close"), vec![Tag::Invalid, Tag::Eof]);
        assert_eq!(
            tags("\"tab\tinside\""),
            vec![Tag::Invalid, Tag::Eof],
            "tab is not a legal string character"
        );
    }

    #[test]
    fn test_columns() {
        let tokens = scan("10 PRINT \"HI\"\n");
        assert_eq!(tokens[0].column, 0..2);
        assert_eq!(tokens[1].column, 3..8);
        assert_eq!(tokens[2].column, 9..13);
        assert_eq!(tokens[3].column, 13..14);
        assert_eq!(tokens[4].column, 14..14);
    }

    #[test]
    fn test_annotate() {
        let source = "10 PRINT \"HI\"\n20 END\n";
        let tokens = scan(source);
        assert_eq!(
            annotate(source, &tokens[1].column),
            "10 PRINT \"HI\"\n   ~~~~~"
        );
        let source = "LET A = 1\n";
        let tokens = scan(source);
        assert_eq!(annotate(source, &tokens[1].column), "LET A = 1\n    ^");
    }
}

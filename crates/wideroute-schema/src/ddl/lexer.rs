use super::DdlError;

///
/// TokenKind
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum TokenKind {
    /// Bare word: keyword, unquoted identifier, type name or number.
    Word(String),

    /// Double-quoted identifier, case preserved.
    Quoted(String),

    /// Single-quoted string literal.
    Literal(String),

    Symbol(char),
}

///
/// Token
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub(crate) fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokenKind::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    pub(crate) fn is_symbol(&self, symbol: char) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    pub(crate) fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Word(w) => w.clone(),
            TokenKind::Quoted(q) => format!("\"{q}\""),
            TokenKind::Literal(l) => format!("'{l}'"),
            TokenKind::Symbol(c) => c.to_string(),
        }
    }
}

// Split CQL text into tokens, dropping whitespace and comments.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, DdlError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (offset, ch) = chars[i];
        let next = chars.get(i + 1).map(|(_, c)| *c);

        match ch {
            c if c.is_whitespace() => i += 1,

            // line comments
            '-' if next == Some('-') => i = skip_line(&chars, i),
            '/' if next == Some('/') => i = skip_line(&chars, i),

            // block comments
            '/' if next == Some('*') => {
                i += 2;
                loop {
                    match (chars.get(i), chars.get(i + 1)) {
                        (Some((_, '*')), Some((_, '/'))) => {
                            i += 2;
                            break;
                        }
                        (Some(_), _) => i += 1,
                        (None, _) => return Err(DdlError::UnterminatedComment { offset }),
                    }
                }
            }

            '"' | '\'' => {
                let (text, end) = read_quoted(&chars, i, ch)?;
                let kind = if ch == '"' {
                    TokenKind::Quoted(text)
                } else {
                    TokenKind::Literal(text)
                };
                tokens.push(Token { kind, offset });
                i = end;
            }

            c if c.is_ascii_alphanumeric() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].1.is_ascii_alphanumeric() || chars[i].1 == '_')
                {
                    i += 1;
                }
                let word: String = chars[start..i].iter().map(|(_, c)| *c).collect();
                tokens.push(Token {
                    kind: TokenKind::Word(word),
                    offset,
                });
            }

            c => {
                tokens.push(Token {
                    kind: TokenKind::Symbol(c),
                    offset,
                });
                i += 1;
            }
        }
    }

    Ok(tokens)
}

fn skip_line(chars: &[(usize, char)], mut i: usize) -> usize {
    while i < chars.len() && chars[i].1 != '\n' {
        i += 1;
    }

    i
}

// A doubled quote character inside the quotes is an escaped quote.
fn read_quoted(
    chars: &[(usize, char)],
    start: usize,
    quote: char,
) -> Result<(String, usize), DdlError> {
    let mut text = String::new();
    let mut i = start + 1;

    loop {
        match chars.get(i) {
            Some((_, c)) if *c == quote => {
                if chars.get(i + 1).is_some_and(|(_, n)| *n == quote) {
                    text.push(quote);
                    i += 2;
                } else {
                    return Ok((text, i + 1));
                }
            }
            Some((_, c)) => {
                text.push(*c);
                i += 1;
            }
            None => {
                return Err(DdlError::UnterminatedQuote {
                    offset: chars[start].0,
                });
            }
        }
    }
}

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    X,
    Y,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Eq,
}

impl Tok {
    pub fn describe(&self) -> String {
        match self {
            Tok::Num(n) => n.to_string(),
            Tok::X => "x".to_string(),
            Tok::Y => "y".to_string(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::LParen => "(".to_string(),
            Tok::RParen => ")".to_string(),
            Tok::Eq => "=".to_string(),
        }
    }
}

/// A token and its character offset in the normalized input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub tok: Tok,
    pub pos: usize,
}

/// Drop whitespace, fold case, and rewrite typographic minus signs and `²`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            c if c.is_whitespace() => {},
            '–' | '−' | '—' => out.push('-'),
            '²' => out.push_str("^2"),
            '·' | '×' => out.push('*'),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}

pub fn tokenize(s: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = s.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let ch = chars[pos];
        let tok = match ch {
            '0'..='9' | '.' => {
                let start = pos;
                while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                    pos += 1;
                }
                let text: String = chars[start..pos].iter().collect();
                let n = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber(text.clone()))?;
                tokens.push(Token { tok: Tok::Num(n), pos: start });
                continue;
            },
            'x' => Tok::X,
            'y' => Tok::Y,
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' | ':' => Tok::Slash,
            '^' => Tok::Caret,
            '(' | '[' => Tok::LParen,
            ')' | ']' => Tok::RParen,
            '=' => Tok::Eq,
            ch => return Err(ParseError::UnexpectedChar { pos, ch }),
        };
        tokens.push(Token { tok, pos });
        pos += 1;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<Tok> {
        tokenize(&normalize(s)).unwrap().into_iter().map(|t| t.tok).collect()
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize(" X²  −  y ² = 1 "), "x^2-y^2=1");
        assert_eq!(normalize("2 · x"), "2*x");
    }

    #[test]
    fn tokens() {
        use Tok::*;
        assert_eq!(toks("x^2/9 - 2.5xy = .5"), vec![ X, Caret, Num(2.), Slash, Num(9.), Minus, Num(2.5), X, Y, Eq, Num(0.5) ]);
        assert_eq!(toks("[x+1]"), vec![ LParen, X, Plus, Num(1.), RParen ]);
    }

    #[test]
    fn positions() {
        let tokens = tokenize("12x+y").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![ 0, 2, 3, 4 ]);
    }

    #[test]
    fn bad_input() {
        assert_eq!(tokenize("1.2.3"), Err(ParseError::InvalidNumber("1.2.3".to_string())));
        assert_eq!(tokenize("."), Err(ParseError::InvalidNumber(".".to_string())));
        assert_eq!(tokenize("x+$"), Err(ParseError::UnexpectedChar { pos: 2, ch: '$' }));
    }
}

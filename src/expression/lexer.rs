//! Tokenization of whitespace-stripped expression text

use super::error::ParseError;
use super::{BinOp, Token, ALPHABET};

/// Split cleaned text into tokens.
///
/// `->` is consumed greedily as a single token before single-character
/// fallbacks, so a lone `-` (or a stray `>`) is an invalid character.
pub(super) fn tokenize(cleaned: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = cleaned.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '-' {
            if i + 1 < chars.len() && chars[i + 1] == '>' {
                tokens.push(Token::Bin(BinOp::Implies));
                i += 2;
                continue;
            }
            return Err(ParseError::InvalidCharacter {
                character: '-',
                position: i,
            });
        }

        let token = match c {
            v if ALPHABET.contains(&v) => Token::Var(v),
            '0' => Token::Const(false),
            '1' => Token::Const(true),
            '!' => Token::Not,
            '&' => Token::Bin(BinOp::And),
            '|' => Token::Bin(BinOp::Or),
            '~' => Token::Bin(BinOp::Equiv),
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(ParseError::InvalidCharacter {
                    character: other,
                    position: i,
                })
            }
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_implication_greedily() {
        let tokens = tokenize("a->b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Var('a'),
                Token::Bin(BinOp::Implies),
                Token::Var('b')
            ]
        );
    }

    #[test]
    fn lone_dash_is_invalid() {
        let err = tokenize("a-b").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCharacter {
                character: '-',
                position: 1
            }
        );
    }

    #[test]
    fn stray_angle_is_invalid() {
        let err = tokenize("a>b").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidCharacter { character: '>', .. }
        ));
    }

    #[test]
    fn constants_are_tokens() {
        let tokens = tokenize("0|1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Const(false),
                Token::Bin(BinOp::Or),
                Token::Const(true)
            ]
        );
    }

    #[test]
    fn rejects_unsupported_letters() {
        assert!(matches!(
            tokenize("f&a"),
            Err(ParseError::InvalidCharacter { character: 'f', .. })
        ));
    }
}

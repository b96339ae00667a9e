//! Structural validation and shunting-yard conversion

use super::error::ParseError;
use super::{BinOp, Postfix, Token};

/// Running parenthesis balance must never go negative and must end at zero.
pub(super) fn check_parentheses(tokens: &[Token]) -> Result<(), ParseError> {
    let mut balance: i32 = 0;
    for token in tokens {
        match token {
            Token::LParen => balance += 1,
            Token::RParen => {
                balance -= 1;
                if balance < 0 {
                    return Err(ParseError::UnbalancedParentheses);
                }
            }
            _ => {}
        }
    }
    if balance != 0 {
        return Err(ParseError::UnbalancedParentheses);
    }
    Ok(())
}

fn placement(reason: &str) -> ParseError {
    ParseError::MismatchedOperatorPlacement {
        reason: reason.to_string(),
    }
}

/// Reject structurally impossible operator sequences before conversion.
///
/// Note that `!` after a binary operator is legal (`a & !b`), as are
/// implication chains (`a -> b -> c`, left-associative); only genuinely
/// malformed placements are refused here. Operand adjacency (`a b`) is
/// left for the evaluation stack machine to detect.
pub(super) fn check_operator_placement(tokens: &[Token]) -> Result<(), ParseError> {
    if let Some(Token::Bin(op)) = tokens.first() {
        return Err(placement(&format!(
            "expression cannot start with binary operator '{}'",
            op.symbol()
        )));
    }
    match tokens.last() {
        Some(Token::Bin(op)) => {
            return Err(placement(&format!(
                "expression cannot end with binary operator '{}'",
                op.symbol()
            )))
        }
        Some(Token::Not) => return Err(placement("expression cannot end with '!'")),
        _ => {}
    }

    for pair in tokens.windows(2) {
        match (pair[0], pair[1]) {
            (Token::Bin(a), Token::Bin(b)) => {
                return Err(placement(&format!(
                    "doubled binary operators '{}{}'",
                    a.symbol(),
                    b.symbol()
                )))
            }
            (Token::Bin(op), Token::RParen) => {
                return Err(placement(&format!(
                    "binary operator '{}' before closing parenthesis",
                    op.symbol()
                )))
            }
            (Token::LParen, Token::Bin(op)) => {
                return Err(placement(&format!(
                    "binary operator '{}' after opening parenthesis",
                    op.symbol()
                )))
            }
            (Token::LParen, Token::RParen) => return Err(placement("empty parentheses")),
            (Token::Not, Token::Bin(_)) | (Token::Not, Token::RParen) => {
                return Err(placement("'!' must precede an operand"))
            }
            _ => {}
        }
    }

    Ok(())
}

/// An operator held on the shunting-yard stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Not,
    Bin(BinOp),
    LParen,
}

impl StackOp {
    fn precedence(self) -> u8 {
        match self {
            StackOp::Not => 4,
            StackOp::Bin(op) => op.precedence(),
            StackOp::LParen => 0,
        }
    }

    fn is_right_associative(self) -> bool {
        // Prefix negation stacks up right-to-left; every binary connective
        // associates to the left, including implication chains.
        matches!(self, StackOp::Not)
    }

    fn to_token(self) -> Token {
        match self {
            StackOp::Not => Token::Not,
            StackOp::Bin(op) => Token::Bin(op),
            StackOp::LParen => Token::LParen,
        }
    }
}

/// Shunting-yard conversion to Reverse Polish order.
pub(super) fn to_postfix(tokens: &[Token]) -> Result<Postfix, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackOp> = Vec::new();

    for &token in tokens {
        match token {
            Token::Var(_) | Token::Const(_) => output.push(token),
            Token::LParen => stack.push(StackOp::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(StackOp::LParen) => break,
                    Some(op) => output.push(op.to_token()),
                    None => return Err(ParseError::MismatchedParenthesis),
                }
            },
            Token::Not | Token::Bin(_) => {
                let incoming = match token {
                    Token::Not => StackOp::Not,
                    Token::Bin(op) => StackOp::Bin(op),
                    _ => unreachable!(),
                };
                while let Some(&top) = stack.last() {
                    if top == StackOp::LParen {
                        break;
                    }
                    let pops = top.precedence() > incoming.precedence()
                        || (top.precedence() == incoming.precedence()
                            && !top.is_right_associative());
                    if !pops {
                        break;
                    }
                    output.push(top.to_token());
                    stack.pop();
                }
                stack.push(incoming);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if op == StackOp::LParen {
            return Err(ParseError::MismatchedParenthesis);
        }
        output.push(op.to_token());
    }

    Ok(Postfix { tokens: output })
}

use crate::error::LexerError;
use crate::token::{Literal, Token, TokenType, RESERVED_WORDS};
use log::{debug, trace};
use lookahead::{IntoLookahead, Lookahead};
use std::str::Chars;

type Result<T> = std::result::Result<T, LexerError>;

/// Turns source text into [`Token`]s, one at a time.
///
/// As an [`Iterator`], it yields every token up to and including the first
/// `EOF`, and stops after an error.
pub struct Lexer<'a> {
    chars: Lookahead<Chars<'a>>,
    line_no: usize,
    col_no: usize,
    finished: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();

        self.finished = match &result {
            Ok(token) => token.token_type() == TokenType::EOF,
            Err(_) => true,
        };

        Some(result)
    }
}

impl<'a> Lexer<'a> {
    /// Create a new [`Lexer`] over `input_text`.
    pub fn new(input_text: &'a str) -> Self {
        debug!("Creating lexer:\n{}", input_text);

        Lexer {
            chars: input_text.chars().lookahead(),
            line_no: 1,
            col_no: 1,
            finished: false,
        }
    }

    /// Scans the next [`Token`]. Returns `EOF` for every call after the
    /// input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            let (line_no, col_no) = (self.line_no, self.col_no);

            let Some(&current) = self.chars.peek() else {
                return Ok(Token::new(
                    TokenType::EOF,
                    Literal::None,
                    line_no,
                    col_no,
                ));
            };

            if current.is_whitespace() {
                self.advance();
                continue;
            }

            if current == '{' {
                self.advance();
                self.skip_comment(line_no, col_no)?;
                continue;
            }

            let token = if current.is_alphabetic() {
                self.identifier(line_no, col_no)
            } else if current.is_ascii_digit() {
                self.number(line_no, col_no)?
            } else if current == ':' {
                self.colon(line_no, col_no)
            } else if let Some(token_type) = TokenType::from_char(current) {
                self.advance();
                Token::with_text(token_type, current, line_no, col_no)
            } else {
                return Err(LexerError::InvalidCharacter {
                    character: current,
                    line_no,
                    col_no,
                });
            };

            trace!("{}:{} {}", line_no, col_no, token);

            return Ok(token);
        }
    }

    fn advance(&mut self) -> Option<char> {
        let current = self.chars.next()?;

        if current == '\n' {
            self.line_no += 1;
            self.col_no = 1;
        } else {
            self.col_no += 1;
        }

        Some(current)
    }

    /// Consumes a run of characters matching `predicate`. The run must not
    /// contain a newline.
    fn advance_while<P>(&mut self, predicate: P) -> String
    where
        P: Fn(&char) -> bool,
    {
        let run: String = self.chars.next_while(predicate).into_iter().collect();

        self.col_no += run.chars().count();

        run
    }

    fn skip_comment(&mut self, line_no: usize, col_no: usize) -> Result<()> {
        loop {
            match self.advance() {
                Some('}') => return Ok(()),
                Some(_) => (),
                None => {
                    return Err(LexerError::UnterminatedComment {
                        line_no,
                        col_no,
                    })
                }
            }
        }
    }

    fn identifier(&mut self, line_no: usize, col_no: usize) -> Token {
        let text = self.advance_while(|c| c.is_alphanumeric());

        let token_type = RESERVED_WORDS
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenType::ID);

        Token::with_text(token_type, text, line_no, col_no)
    }

    fn number(&mut self, line_no: usize, col_no: usize) -> Result<Token> {
        let mut literal = self.advance_while(char::is_ascii_digit);

        let is_real = self.chars.next_is(|c| *c == '.')
            && self.chars.nth_is(1, char::is_ascii_digit);

        let invalid = |literal: String| LexerError::InvalidNumber {
            literal,
            line_no,
            col_no,
        };

        if is_real {
            self.advance();
            literal.push('.');
            literal.push_str(&self.advance_while(char::is_ascii_digit));

            let real = literal.parse::<f64>().map_err(|_| invalid(literal))?;

            Ok(Token::new(
                TokenType::RealConst,
                Literal::Real(real),
                line_no,
                col_no,
            ))
        } else {
            let integer =
                literal.parse::<i64>().map_err(|_| invalid(literal))?;

            Ok(Token::new(
                TokenType::IntegerConst,
                Literal::Integer(integer),
                line_no,
                col_no,
            ))
        }
    }

    fn colon(&mut self, line_no: usize, col_no: usize) -> Token {
        if self.chars.nth_is(1, |c| *c == '=') {
            self.advance();
            self.advance();
            Token::with_text(TokenType::Assign, ":=", line_no, col_no)
        } else {
            self.advance();
            Token::with_text(TokenType::Colon, ":", line_no, col_no)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn lex(input: &str) -> Result<Vec<Token>> {
        Ok(Lexer::new(input).collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn lex_types(input: &str) -> Result<Vec<TokenType>> {
        Ok(lex(input)?.iter().map(Token::token_type).collect())
    }

    #[test]
    fn test_full_program() -> Result<()> {
        let input = "PROGRAM Part10AST;
            VAR
              a, b : INTEGER;
              y    : REAL;

            BEGIN {Part10AST}
              a := 2;
              b := 10 * a + 10 * a DIV 4;
              y := 20 / 7 + 3.14;
            END.  {Part10AST}";

        let reference = [
            "Token(PROGRAM, PROGRAM)",
            "Token(ID, Part10AST)",
            "Token(SEMI, ;)",
            "Token(VAR, VAR)",
            "Token(ID, a)",
            "Token(COMMA, ,)",
            "Token(ID, b)",
            "Token(COLON, :)",
            "Token(INTEGER, INTEGER)",
            "Token(SEMI, ;)",
            "Token(ID, y)",
            "Token(COLON, :)",
            "Token(REAL, REAL)",
            "Token(SEMI, ;)",
            "Token(BEGIN, BEGIN)",
            "Token(ID, a)",
            "Token(ASSIGN, :=)",
            "Token(INTEGER_CONST, 2)",
            "Token(SEMI, ;)",
            "Token(ID, b)",
            "Token(ASSIGN, :=)",
            "Token(INTEGER_CONST, 10)",
            "Token(MUL, *)",
            "Token(ID, a)",
            "Token(PLUS, +)",
            "Token(INTEGER_CONST, 10)",
            "Token(MUL, *)",
            "Token(ID, a)",
            "Token(INTEGER_DIV, DIV)",
            "Token(INTEGER_CONST, 4)",
            "Token(SEMI, ;)",
            "Token(ID, y)",
            "Token(ASSIGN, :=)",
            "Token(INTEGER_CONST, 20)",
            "Token(FLOAT_DIV, /)",
            "Token(INTEGER_CONST, 7)",
            "Token(PLUS, +)",
            "Token(REAL_CONST, 3.14)",
            "Token(SEMI, ;)",
            "Token(END, END)",
            "Token(DOT, .)",
            "Token(EOF, None)",
        ];

        let tokens: Vec<String> =
            lex(input)?.iter().map(ToString::to_string).collect();

        assert_eq!(tokens, reference);

        Ok(())
    }

    #[test]
    fn test_eof_is_idempotent() -> Result<()> {
        let mut lexer = Lexer::new("END");

        assert_eq!(lexer.next_token()?.token_type(), TokenType::End);

        for _ in 0..3 {
            assert_eq!(lexer.next_token()?.token_type(), TokenType::EOF);
        }

        Ok(())
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let mut lexer = Lexer::new("");

        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_real_needs_digit_after_dot() -> Result<()> {
        let tokens = lex("3.14 3. 7")?;

        assert_eq!(tokens[0].literal(), &Literal::Real(3.14));
        assert_eq!(tokens[1].literal(), &Literal::Integer(3));
        assert_eq!(tokens[2].token_type(), TokenType::Dot);
        assert_eq!(tokens[3].literal(), &Literal::Integer(7));

        Ok(())
    }

    #[test]
    fn test_sign_is_separate_token() -> Result<()> {
        assert_eq!(
            lex_types("-5 +2.5")?,
            [
                TokenType::Minus,
                TokenType::IntegerConst,
                TokenType::Plus,
                TokenType::RealConst,
                TokenType::EOF
            ]
        );

        Ok(())
    }

    #[test]
    fn test_reserved_words_and_ids() -> Result<()> {
        assert_eq!(
            lex_types("BEGIN begin x1 DIV div")?,
            [
                TokenType::Begin,
                TokenType::ID,
                TokenType::ID,
                TokenType::IntegerDiv,
                TokenType::ID,
                TokenType::EOF
            ]
        );

        Ok(())
    }

    #[test]
    fn test_colon_and_assign() -> Result<()> {
        assert_eq!(
            lex_types("a : b := c:=d")?,
            [
                TokenType::ID,
                TokenType::Colon,
                TokenType::ID,
                TokenType::Assign,
                TokenType::ID,
                TokenType::Assign,
                TokenType::ID,
                TokenType::EOF
            ]
        );

        Ok(())
    }

    #[test]
    fn test_comments_are_skipped() -> Result<()> {
        assert_eq!(
            lex_types("{ one } a {two\nlines}{}b")?,
            [TokenType::ID, TokenType::ID, TokenType::EOF]
        );

        Ok(())
    }

    #[test]
    fn test_unterminated_comment() {
        let mut lexer = Lexer::new("a\n  { never closed");

        assert!(lexer.next_token().is_ok());
        assert_eq!(
            lexer.next_token(),
            Err(LexerError::UnterminatedComment {
                line_no: 2,
                col_no: 3
            })
        );
    }

    #[test]
    fn test_invalid_character() {
        let result = lex("a := 1 # 2");

        let error = result.unwrap_err().downcast::<LexerError>().unwrap();

        assert_eq!(
            error,
            LexerError::InvalidCharacter {
                character: '#',
                line_no: 1,
                col_no: 8
            }
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        let mut lexer = Lexer::new("99999999999999999999");

        assert!(matches!(
            lexer.next_token(),
            Err(LexerError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_token_positions() -> Result<()> {
        let tokens = lex("a\n  := 10")?;

        let positions: Vec<(usize, usize)> =
            tokens.iter().map(|t| (t.line_no(), t.col_no())).collect();

        assert_eq!(positions, [(1, 1), (2, 3), (2, 6), (2, 8)]);

        Ok(())
    }

    #[test]
    fn test_positions_after_runs() -> Result<()> {
        let tokens = lex("abc123 := 45.5;")?;

        let columns: Vec<usize> = tokens.iter().map(Token::col_no).collect();

        assert_eq!(columns, [1, 8, 11, 15, 16]);

        Ok(())
    }
}

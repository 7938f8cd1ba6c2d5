//! Parser parses decimal numbers given in positional or scientific format.

use crate::defs::Error;
use crate::defs::Sign;
use core::str::Chars;

/// The largest absolute value of the exponent part accepted by the parser.
pub const EXPONENT_LIMIT: isize = 1_000_000;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: String,
    frac_len: usize,
    e: isize,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: String::with_capacity(s.len()),
            frac_len: 0,
            e: 0,
        }
    }

    // Returns next character of a string in lower case,
    // or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    /// Returns the sign, all mantissa digits, the number of fractional digits among them,
    /// and the exponent.
    pub fn raw_parts(&self) -> (Sign, &str, usize, isize) {
        (self.sign, &self.digits, self.frac_len, self.e)
    }
}

/// Parse a decimal number: `[+-]digits[.digits][e[+-]digits]`.
/// Either the integer or the fractional part can be omitted, but not both.
pub fn parse(s: &str) -> Result<ParserState, Error> {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if ch.is_none() {
        return Err(Error::InvalidArgument);
    }

    let int_len = parse_digits(&mut parser_state);

    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        parser_state.frac_len = parse_digits(&mut parser_state);
    }

    if int_len == 0 && parser_state.frac_len == 0 {
        return Err(Error::InvalidArgument);
    }

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(&mut parser_state)?;
    }

    // trailing characters
    if parser_state.cur_char().is_some() {
        return Err(Error::InvalidArgument);
    }

    Ok(parser_state)
}

fn parse_digits(parser_state: &mut ParserState) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;

    while let Some(c) = ch {
        if c.is_ascii_digit() {
            parser_state.digits.push(c);
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    len
}

fn parse_exp(parser_state: &mut ParserState) -> Result<(), Error> {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut len = 0;
    while let Some(c) = ch {
        if let Some(digit) = c.to_digit(10) {
            parser_state.e = parser_state.e * 10 + digit as isize;
            if parser_state.e > EXPONENT_LIMIT {
                return Err(Error::InvalidArgument);
            }
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if len == 0 {
        return Err(Error::InvalidArgument);
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    Ok(())
}

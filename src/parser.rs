//! Parser parses decimal numbers represented in positional or scientific format.

use core::str::Chars;

use num_bigint::{BigInt, BigUint, Sign as BigSign};

use crate::defs::Error;
use crate::defs::Sign;

/// Maximum absolute value of the decimal exponent accepted by the parser.
pub const DECIMAL_EXPONENT_MAX: i64 = 100_000;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    mantissa_bytes: Vec<u8>,
    frac_len: i64,
    e: i64,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            mantissa_bytes: Vec::new(),
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

    /// Returns the signed integer mantissa `d` and the decimal exponent `x`:
    /// the parsed value equals `d * 10^x`.
    pub fn raw_parts(&self) -> (BigInt, i64) {
        let mag = BigUint::from_radix_be(&self.mantissa_bytes, 10).unwrap_or_default();
        let s = if self.sign.is_negative() { BigSign::Minus } else { BigSign::Plus };
        (BigInt::from_biguint(s, mag), self.e - self.frac_len)
    }
}

/// Parse a decimal number, e.g. `-12.5`, `6.67430e-11`, `.5E+3`.
pub fn parse(s: &str) -> Result<ParserState, Error> {
    let mut parser_state = ParserState::new(s.trim());
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

    match ch {
        Some('.' | '0'..='9') => parse_num(&mut parser_state)?,
        _ => return Err(Error::InvalidArgument("s")),
    }

    if parser_state.cur_char().is_some() {
        // trailing characters
        return Err(Error::InvalidArgument("s"));
    }

    Ok(parser_state)
}

fn parse_num(parser_state: &mut ParserState) -> Result<(), Error> {
    let int_len = parse_digits(parser_state);

    let mut frac_len = 0;
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        frac_len = parse_digits(parser_state);
    }

    if int_len == 0 && frac_len == 0 {
        return Err(Error::InvalidArgument("s"));
    }

    parser_state.frac_len = frac_len as i64;

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(parser_state)?;
    }

    Ok(())
}

fn parse_digits(parser_state: &mut ParserState) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            parser_state.mantissa_bytes.push(d as u8);
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
        if let Some(d) = c.to_digit(10) {
            parser_state.e = parser_state.e * 10 + d as i64;
            if parser_state.e > DECIMAL_EXPONENT_MAX {
                return Err(Error::InvalidArgument("s"));
            }
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if len == 0 {
        return Err(Error::InvalidArgument("s"));
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    Ok(())
}

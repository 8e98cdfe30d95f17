//! Literal forms of scalars and strings.

use std::fmt::{Display, LowerExp, Write};

/// Floats switch to exponent form outside of `1e-4 <= |x| < 1e6`.
const MIN_EXP: i32 = -4;
const MAX_EXP: i32 = 6;

pub(crate) fn format_float32(x: f32) -> String {
    let mut out = String::new();
    write_float(&mut out, x, x.is_nan(), x.is_infinite(), false);
    out
}

pub(crate) fn format_float64(x: f64) -> String {
    let mut out = String::new();
    write_float(&mut out, x, x.is_nan(), x.is_infinite(), false);
    out
}

pub(crate) fn format_complex64(re: f32, im: f32) -> String {
    let mut out = String::from("(");
    write_float(&mut out, re, re.is_nan(), re.is_infinite(), false);
    write_float(&mut out, im, im.is_nan(), im.is_infinite(), true);
    out.push_str("i)");
    out
}

pub(crate) fn format_complex128(re: f64, im: f64) -> String {
    let mut out = String::from("(");
    write_float(&mut out, re, re.is_nan(), re.is_infinite(), false);
    write_float(&mut out, im, im.is_nan(), im.is_infinite(), true);
    out.push_str("i)");
    out
}

/// Write the shortest decimal that parses back to `x`. If `plus`, always write a sign.
fn write_float<F>(out: &mut String, x: F, is_nan: bool, is_infinite: bool, plus: bool)
where
    F: Display + LowerExp + PartialOrd + Default,
{
    if is_nan {
        out.push_str(if plus { "+NaN" } else { "NaN" });
        return;
    }
    if is_infinite {
        out.push_str(if x > F::default() { "+Inf" } else { "-Inf" });
        return;
    }

    // `{:e}` gives the shortest round-trip digits, as `d.ddde<exp>`.
    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if plus && !mantissa.starts_with('-') {
        out.push('+');
    }
    if exp < MIN_EXP || exp >= MAX_EXP {
        let sign = if exp < 0 { '-' } else { '+' };
        let _ = write!(out, "{}e{}{:02}", mantissa, sign, exp.abs());
    } else {
        let _ = write!(out, "{}", x);
    }
}

/// Surround `s` in double quotes, escaping quotes, backslashes, and non-printable characters.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            ch if is_printable(ch) => out.push(ch),
            ch if (ch as u32) < 0x80 => {
                let _ = write!(out, "\\x{:02x}", ch as u32);
            }
            ch if (ch as u32) < 0x10000 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => {
                let _ = write!(out, "\\U{:08x}", ch as u32);
            }
        }
    }
    out.push('"');
    out
}

fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    if ch.is_control() || ch.is_whitespace() {
        return false;
    }
    !(is_format(ch) || is_private_use(ch) || is_noncharacter(ch))
}

/// General category Cf: invisible characters that only affect layout.
fn is_format(ch: char) -> bool {
    matches!(
        ch,
        '\u{AD}'
            | '\u{600}'..='\u{605}'
            | '\u{61C}'
            | '\u{6DD}'
            | '\u{70F}'
            | '\u{890}'..='\u{891}'
            | '\u{8E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

/// General category Co.
fn is_private_use(ch: char) -> bool {
    matches!(
        ch,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}

/// Code points that are permanently unassigned (part of category Cn).
fn is_noncharacter(ch: char) -> bool {
    let code = ch as u32;
    (0xFDD0..=0xFDEF).contains(&code) || code & 0xFFFE == 0xFFFE
}

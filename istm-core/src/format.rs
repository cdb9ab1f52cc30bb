//! printf-style template formatting
//!
//! Templates use `%` verbs (`%s`, `%d`, `%v`, `%5.2f`, `%[2]s`, ...). Formatting
//! never fails: a verb that does not fit its argument, a missing argument or
//! a surplus argument is written into the output as a `%!` marker, e.g.
//! `%!d(string=abc)`, `%!d(MISSING)` or `%!(EXTRA int=3)`.

use crate::args::Arg;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Widths and precisions above this are rejected
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitute `args` into `template`
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    let mut next = 0usize;
    let mut reordered = false;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }

        spec.width = read_number(&mut chars);
        if spec.width.is_some_and(|w| w > MAX_WIDTH) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.next_if_eq(&'.').is_some() {
            let precision = read_number(&mut chars).unwrap_or(0);
            if precision > MAX_WIDTH {
                out.push_str("%!(BADPREC)");
            } else {
                spec.precision = Some(precision);
            }
        }

        let mut bad_index = false;
        if chars.next_if_eq(&'[').is_some() {
            reordered = true;
            match read_index(&mut chars) {
                Some(index) if (1..=args.len()).contains(&index) => next = index - 1,
                _ => bad_index = true,
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        if bad_index {
            let _ = write!(out, "%!{verb}(BADINDEX)");
            continue;
        }

        match args.get(next) {
            Some(arg) => {
                next += 1;
                write_arg(&mut out, verb, &spec, arg);
            }
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
        }
    }

    if !reordered && next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    out
}

/// `%v` rendering of a float
pub(crate) fn float_value(v: f64) -> String {
    render_float('v', &Spec::default(), v).unwrap_or_else(|| v.to_string())
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

// Index inside `[n]`, after the `[`. A bad index still consumes through the
// closing `]`; without one only the `[` is consumed.
fn read_index(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut lookahead = chars.clone();
    let mut digits = String::new();
    loop {
        match lookahead.next() {
            Some(']') => break,
            Some(c) => digits.push(c),
            None => return None,
        }
    }
    *chars = lookahead;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn write_arg(out: &mut String, verb: char, spec: &Spec, arg: &Arg) {
    match render(verb, spec, arg) {
        Some(body) => {
            // `%06.3d`: precision wins over zero padding for integers
            let mut spec = *spec;
            if spec.precision.is_some() && matches!(arg, Arg::Int(_) | Arg::Uint(_)) {
                spec.zero = false;
            }
            pad(out, &body, &spec, arg.is_numeric())
        }
        None => {
            let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
        }
    }
}

fn render(verb: char, spec: &Spec, arg: &Arg) -> Option<String> {
    match arg {
        Arg::Text(text) => render_text(verb, spec, text),
        Arg::Int(n) => render_integer(verb, spec, n.unsigned_abs(), *n < 0),
        Arg::Uint(n) => render_integer(verb, spec, *n, false),
        Arg::Float(v) => render_float(verb, spec, *v),
        Arg::Bool(b) => matches!(verb, 'v' | 't').then(|| b.to_string()),
    }
}

fn render_text(verb: char, spec: &Spec, text: &str) -> Option<String> {
    match verb {
        'v' | 's' => Some(match spec.precision {
            Some(precision) => text.chars().take(precision).collect(),
            None => text.to_string(),
        }),
        'q' => Some(format!("{text:?}")),
        'x' => Some(text.bytes().map(|b| format!("{b:02x}")).collect()),
        'X' => Some(text.bytes().map(|b| format!("{b:02X}")).collect()),
        _ => None,
    }
}

fn render_integer(verb: char, spec: &Spec, magnitude: u64, negative: bool) -> Option<String> {
    let digits = match verb {
        'v' | 'd' => magnitude.to_string(),
        'b' => format!("{magnitude:b}"),
        'o' => format!("{magnitude:o}"),
        'x' => format!("{magnitude:x}"),
        'X' => format!("{magnitude:X}"),
        'c' => return Some(to_char(magnitude, negative).to_string()),
        'q' => return Some(format!("{:?}", to_char(magnitude, negative))),
        _ => return None,
    };

    let digits = match spec.precision {
        Some(precision) if digits.len() < precision => {
            format!("{}{digits}", "0".repeat(precision - digits.len()))
        }
        _ => digits,
    };
    let prefix = match (spec.sharp, verb) {
        (true, 'b') => "0b",
        (true, 'o') => "0",
        (true, 'x') => "0x",
        (true, 'X') => "0X",
        _ => "",
    };
    Some(format!("{}{prefix}{digits}", sign(spec, negative)))
}

fn render_float(verb: char, spec: &Spec, v: f64) -> Option<String> {
    if !matches!(verb, 'v' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G') {
        return None;
    }
    if v.is_nan() {
        return Some("NaN".to_string());
    }
    if v.is_infinite() {
        return Some(if v > 0.0 { "+Inf" } else { "-Inf" }.to_string());
    }

    let magnitude = v.abs();
    let body = match verb {
        'e' => exponent(magnitude, spec.precision.unwrap_or(6), false),
        'E' => exponent(magnitude, spec.precision.unwrap_or(6), true),
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), magnitude),
        'G' => general(magnitude, spec.precision, true),
        _ => general(magnitude, spec.precision, false),
    };
    Some(format!("{}{body}", sign(spec, v.is_sign_negative())))
}

fn sign(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn to_char(magnitude: u64, negative: bool) -> char {
    if negative {
        return char::REPLACEMENT_CHARACTER;
    }
    u32::try_from(magnitude)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn exponent(v: f64, precision: usize, upper: bool) -> String {
    with_signed_exponent(&format!("{:.*e}", precision, v), upper)
}

// `%g` and `%v`: shortest representation, or `precision` significant digits.
// Exponent form below 1e-4 and from 10^precision up, 10^6 when shortest.
fn general(v: f64, precision: Option<usize>, upper: bool) -> String {
    let scientific = match precision {
        Some(p) => format!("{:.*e}", p.max(1) - 1, v),
        None => format!("{v:e}"),
    };
    let (mantissa, exp) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let limit = precision.map_or(6, |p| p.max(1) as i32);

    if exp < -4 || exp >= limit {
        return with_signed_exponent(&format!("{}e{exp}", trim_zeros(mantissa)), upper);
    }
    match precision {
        Some(p) => {
            let decimals = (p.max(1) as i32 - 1 - exp).max(0) as usize;
            trim_zeros(&format!("{:.*}", decimals, v)).to_string()
        }
        None => v.to_string(),
    }
}

// `1.5e3` -> `1.5e+03`
fn with_signed_exponent(raw: &str, upper: bool) -> String {
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn pad(out: &mut String, body: &str, spec: &Spec, numeric: bool) {
    let len = body.chars().count();
    let fill = match spec.width {
        Some(width) if width > len => width - len,
        _ => {
            out.push_str(body);
            return;
        }
    };

    if spec.minus {
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero {
        let (sign, digits) = match body.chars().next() {
            Some(c @ ('+' | '-' | ' ')) if numeric => body.split_at(c.len_utf8()),
            _ => ("", body),
        };
        out.push_str(sign);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(template: &str, args: &[Arg]) -> String {
        sprintf(template, args)
    }

    #[test]
    fn test_plain_substitution() {
        assert_eq!(
            fmt("'%s'の数値が不正です: %d", &["名前".into(), 2.into()]),
            "'名前'の数値が不正です: 2"
        );
        assert_eq!(fmt("%v and %v", &["a".into(), 1.5.into()]), "a and 1.5");
        assert_eq!(fmt("no verbs", &[]), "no verbs");
    }

    #[test]
    fn test_percent_literal() {
        assert_eq!(fmt("100%%", &[]), "100%");
        assert_eq!(fmt("%d%%", &[50.into()]), "50%");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(fmt("%s: %d", &["x".into()]), "x: %!d(MISSING)");
    }

    #[test]
    fn test_extra_arguments() {
        assert_eq!(
            fmt("テストエラー", &["x".into(), 3.into()]),
            "テストエラー%!(EXTRA string=x, int=3)"
        );
    }

    #[test]
    fn test_wrong_type() {
        assert_eq!(
            fmt("'%s' %d", &[2.into(), "x".into()]),
            "'%!s(int=2)' %!d(string=x)"
        );
        assert_eq!(fmt("%d", &[true.into()]), "%!d(bool=true)");
        assert_eq!(fmt("%z", &[1.into()]), "%!z(int=1)");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(fmt("50%", &[]), "50%!(NOVERB)");
    }

    #[test]
    fn test_width_and_alignment() {
        assert_eq!(fmt("[%5d]", &[42.into()]), "[   42]");
        assert_eq!(fmt("[%-5s]", &["ab".into()]), "[ab   ]");
        assert_eq!(fmt("[%05d]", &[(-42).into()]), "[-0042]");
        assert_eq!(fmt("[%4s]", &["名前".into()]), "[  名前]");
    }

    #[test]
    fn test_signs() {
        assert_eq!(fmt("%+d", &[5.into()]), "+5");
        assert_eq!(fmt("% d", &[5.into()]), " 5");
        assert_eq!(fmt("%d", &[i64::MIN.into()]), "-9223372036854775808");
    }

    #[test]
    fn test_integer_radix() {
        assert_eq!(
            fmt("%x %X %o %b", &[255.into(), 255.into(), 8.into(), 5.into()]),
            "ff FF 10 101"
        );
        assert_eq!(fmt("%#x %#o", &[255.into(), 8.into()]), "0xff 010");
        assert_eq!(fmt("%.3d", &[7.into()]), "007");
    }

    #[test]
    fn test_precision_disables_zero_padding_for_integers() {
        assert_eq!(fmt("[%06.3d]", &[7.into()]), "[   007]");
        assert_eq!(fmt("[%06.3d]", &[(-7).into()]), "[  -007]");
        assert_eq!(fmt("[%06d]", &[7.into()]), "[000007]");
        assert_eq!(fmt("[%08.2f]", &[1.5.into()]), "[00001.50]");
    }

    #[test]
    fn test_chars_and_quotes() {
        assert_eq!(fmt("%c", &[65.into()]), "A");
        assert_eq!(fmt("%q", &[65.into()]), "'A'");
        assert_eq!(fmt("%q", &["hi".into()]), "\"hi\"");
        assert_eq!(fmt("%x", &["hi".into()]), "6869");
    }

    #[test]
    fn test_floats() {
        assert_eq!(fmt("%.2f", &[1.23456.into()]), "1.23");
        assert_eq!(fmt("%f", &[1.5.into()]), "1.500000");
        assert_eq!(fmt("%e", &[1234.5678.into()]), "1.234568e+03");
        assert_eq!(fmt("%E", &[0.00012.into()]), "1.200000E-04");
        assert_eq!(fmt("%g", &[2.5.into()]), "2.5");
        assert_eq!(fmt("%.3g", &[1234.5.into()]), "1.23e+03");
        assert_eq!(fmt("%v", &[1e21.into()]), "1e+21");
        assert_eq!(fmt("%v", &[1e6.into()]), "1e+06");
        assert_eq!(fmt("%v", &[123456789.0.into()]), "1.23456789e+08");
        assert_eq!(fmt("%v", &[123456.0.into()]), "123456");
        assert_eq!(fmt("%v", &[(-2.5e7).into()]), "-2.5e+07");
        assert_eq!(fmt("%g", &[1e6.into()]), "1e+06");
        assert_eq!(fmt("%v", &[0.0001.into()]), "0.0001");
        assert_eq!(fmt("%v", &[0.00001.into()]), "1e-05");
        assert_eq!(fmt("%v", &[2.0.into()]), "2");
        assert_eq!(fmt("%v", &[f64::NAN.into()]), "NaN");
        assert_eq!(fmt("%v", &[f64::NEG_INFINITY.into()]), "-Inf");
        assert_eq!(fmt("%d", &[1.5.into()]), "%!d(float64=1.5)");
    }

    #[test]
    fn test_bools() {
        assert_eq!(fmt("%t %v", &[true.into(), false.into()]), "true false");
        assert_eq!(fmt("%s", &[true.into()]), "%!s(bool=true)");
    }

    #[test]
    fn test_string_precision_truncates() {
        assert_eq!(fmt("%.3s", &["abcdef".into()]), "abc");
        assert_eq!(fmt("%.1s", &["名前".into()]), "名");
    }

    #[test]
    fn test_explicit_index() {
        assert_eq!(
            fmt("%[2]s / %[1]s", &["first".into(), "second".into()]),
            "second / first"
        );
        assert_eq!(fmt("%[3]s", &["only".into()]), "%!s(BADINDEX)");
        assert_eq!(fmt("%[x]s", &["only".into()]), "%!s(BADINDEX)");
        assert_eq!(fmt("%[]d!", &[1.into()]), "%!d(BADINDEX)!");
        assert_eq!(fmt("%[0]s", &["only".into()]), "%!s(BADINDEX)");
        assert_eq!(fmt("%[1s", &["only".into()]), "%!1(BADINDEX)s");
    }

    #[test]
    fn test_bad_width() {
        assert_eq!(fmt("%99999999d", &[1.into()]), "%!(BADWIDTH)1");
    }
}

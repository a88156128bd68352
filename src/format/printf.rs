//! `%`-verb expansion over already-rendered arguments.
//!
//! Supported verbs: `%s %v %d` (verbatim), `%q` (quoted), `%x` (hex of the
//! text), `%%`. Each verb may carry `[flags][width][.precision]`:
//! - `-` pads on the right instead of the left
//! - `0` pads with zeros (after the sign for `%d`)
//! - width counts chars; shorter text is padded up to it
//! - precision clips `%s %v %q` to that many chars, `%x` to that many bytes,
//!   and zero-extends the digits of `%d`
//!
//! Flags `+ #` and space are accepted and ignored. Mismatches render inline
//! markers instead of failing:
//! - missing argument: `%!s(MISSING)`
//! - unknown verb: `%!z(string=arg)`
//! - dangling `%`: `%!(NOVERB)`
//! - surplus arguments: `%!(EXTRA string=a, string=b)`

use std::fmt::Write as _;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Spec {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Self {
        let mut spec = Spec::default();
        while let Some(&c) = chars.peek() {
            match c {
                '-' => spec.left = true,
                '0' => spec.zero = true,
                '+' | '#' | ' ' => {}
                _ => break,
            }
            chars.next();
        }
        spec.width = digits(chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(digits(chars).unwrap_or(0));
        }
        spec
    }

    fn pad(&self, text: String, numeric: bool) -> String {
        let len = text.chars().count();
        let fill = match self.width {
            Some(width) if width > len => width - len,
            _ => return text,
        };

        if self.left {
            let mut out = text;
            out.extend(std::iter::repeat(' ').take(fill));
            return out;
        }

        let mut out = String::with_capacity(text.len() + fill);
        if self.zero {
            let body = match text.chars().next() {
                Some(sign @ ('-' | '+')) if numeric => {
                    out.push(sign);
                    &text[1..]
                }
                _ => text.as_str(),
            };
            out.extend(std::iter::repeat('0').take(fill));
            out.push_str(body);
        } else {
            out.extend(std::iter::repeat(' ').take(fill));
            out.push_str(&text);
        }
        out
    }
}

fn digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    value
}

fn clip(text: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|n| text.char_indices().nth(n)) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn min_digits(text: &str, precision: Option<usize>) -> String {
    let Some(precision) = precision else {
        return text.to_string();
    };
    let (sign, digits) = match text.strip_prefix(&['-', '+'][..]) {
        Some(rest) => (&text[..1], rest),
        None => ("", text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.len() >= precision {
        return text.to_string();
    }
    format!("{sign}{digits:0>precision$}")
}

/// Expand `format` against already-rendered arguments.
pub fn expand<S: AsRef<str>>(format: &str, args: &[S]) -> String {
    expand_with(format, args, str::to_string)
}

/// [`expand`], passing every substituted argument through `paint` once its
/// width and precision are applied.
pub fn expand_with<S, F>(format: &str, args: &[S], paint: F) -> String
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(format.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>());
    let mut next_arg = 0;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = Spec::parse(&mut chars);

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next_arg).map(AsRef::as_ref) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next_arg += 1;

        let text = match verb {
            's' | 'v' => clip(arg, spec.precision).to_string(),
            'd' => min_digits(arg, spec.precision),
            'q' => format!("{:?}", clip(arg, spec.precision)),
            'x' => {
                let bytes = arg.as_bytes();
                let shown = &bytes[..spec.precision.map_or(bytes.len(), |n| n.min(bytes.len()))];
                let mut hex = String::with_capacity(shown.len() * 2);
                for b in shown {
                    let _ = write!(hex, "{b:02x}");
                }
                hex
            }
            other => {
                let _ = write!(out, "%!{other}(string={})", paint(arg));
                continue;
            }
        };
        out.push_str(&paint(&spec.pad(text, verb == 'd')));
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str("string=");
            out.push_str(&paint(arg.as_ref()));
        }
        out.push(')');
    }
    out
}

//! ANSI SGR sequences and per-line wrapping.
//!
//! # Design Decisions
//! - Each line gets its own prefix/reset pair so styling survives
//!   line-buffered pipes and terminals that reset at newlines
//! - One trailing `\n` or `\r\n` is kept outside the wrapping, verbatim

use crate::color::rgb::Rgb;

/// Universal SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Foreground, optional background, optional bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    pub const fn fg(fg: Rgb, bold: bool) -> Self {
        Self { fg, bg: None, bold }
    }

    pub const fn fg_bg(fg: Rgb, bg: Rgb, bold: bool) -> Self {
        Self { fg, bg: Some(bg), bold }
    }

    /// The escape sequence opening this style.
    pub fn prefix(&self) -> String {
        let bold = if self.bold { "1;" } else { "" };
        match self.bg {
            None => format!("\x1b[{bold}38;2;{}m", self.fg),
            Some(bg) => format!("\x1b[{bold}38;2;{};48;2;{}m", self.fg, bg),
        }
    }

    /// Wrap every line of `text` in this style.
    pub fn paint_lines(&self, text: &str) -> String {
        wrap_lines(text, &self.prefix())
    }
}

/// Split off exactly one trailing newline sequence, if any.
pub fn split_trailing_newline(text: &str) -> (&str, &str) {
    if let Some(body) = text.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = text.strip_suffix('\n') {
        (body, "\n")
    } else {
        (text, "")
    }
}

/// Prefix each `\n`-separated line with `prefix` and suffix it with [`RESET`].
pub fn wrap_lines(text: &str, prefix: &str) -> String {
    let (body, trailing) = split_trailing_newline(text);
    let line_count = body.split('\n').count();
    let mut out =
        String::with_capacity(text.len() + line_count * (prefix.len() + RESET.len()));

    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
        out.push_str(RESET);
    }
    out.push_str(trailing);
    out
}

/// Remove CSI sequences (`ESC [ params final`), OSC sequences (`ESC ] ...`
/// ended by BEL or `ESC \`) and stray `ESC` bytes.
pub fn strip_ansi(text: &str) -> String {
    if !text.contains('\x1b') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameter and intermediate bytes run until a final byte in 0x40..=0x7E.
                for next in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&next) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(next) = chars.next() {
                    if next == '\x07' {
                        break;
                    }
                    if next == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn test_prefix_variants() {
        assert_eq!(Style::fg(RED, false).prefix(), "\x1b[38;2;255;0;0m");
        assert_eq!(Style::fg(RED, true).prefix(), "\x1b[1;38;2;255;0;0m");
        assert_eq!(
            Style::fg_bg(BLACK, RED, false).prefix(),
            "\x1b[38;2;0;0;0;48;2;255;0;0m"
        );
        assert_eq!(
            Style::fg_bg(BLACK, RED, true).prefix(),
            "\x1b[1;38;2;0;0;0;48;2;255;0;0m"
        );
    }

    #[test]
    fn test_wrap_each_line() {
        let out = wrap_lines("a\nb", "<");
        assert_eq!(out, format!("<a{RESET}\n<b{RESET}"));
    }

    #[test]
    fn test_trailing_newline_preserved_verbatim() {
        assert_eq!(wrap_lines("a\n", "<"), format!("<a{RESET}\n"));
        assert_eq!(wrap_lines("a\r\n", "<"), format!("<a{RESET}\r\n"));
        // Only one trailing newline is held back; the rest are lines.
        assert_eq!(wrap_lines("a\n\n", "<"), format!("<a{RESET}\n<{RESET}\n"));
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert_eq!(wrap_lines("", "<"), format!("<{RESET}"));
        assert_eq!(wrap_lines("\n", "<"), format!("<{RESET}\n"));
        assert_eq!(
            wrap_lines("x\n\ny", "<"),
            format!("<x{RESET}\n<{RESET}\n<y{RESET}")
        );
    }

    #[test]
    fn test_line_count_matches_input() {
        let inputs = ["one", "one\ntwo", "one\ntwo\n", "\n\n\nthree", "a\r\nb\r\n"];
        for input in inputs {
            let out = Style::fg(RED, false).paint_lines(input);
            assert_eq!(out.matches('\n').count(), input.matches('\n').count());
            assert_eq!(out.ends_with('\n'), input.ends_with('\n'));
        }
    }

    #[test]
    fn test_strip_ansi_inverts_painting() {
        let style = Style::fg_bg(BLACK, RED, true);
        for input in ["plain", "multi\nline\n", "", "crlf\r\n", "ünïcödé\n✓"] {
            assert_eq!(strip_ansi(&style.paint_lines(input)), input);
        }
        assert_eq!(strip_ansi("\x1b[2J\x1b[1;1Hhome"), "home");
        assert_eq!(strip_ansi("lone\x1b escape"), "lone escape");
        assert_eq!(strip_ansi("\x1b]0;title\x07after"), "after");
        assert_eq!(strip_ansi("a\x1b]8;;http://x\x1b\\link\x1b]8;;\x1b\\b"), "alinkb");
    }
}

//! Formatted-text-to-markup renderer.
//!
//! Item names and lore arrive as plain text with `§`-prefixed
//! formatting codes (legacy chat format). `render` converts such a
//! string into a flat list of styled spans; the frontend binds each
//! span to a `<span>` with the given inline style. Segments are
//! independent: a code only styles the text up to the next sentinel,
//! styles never stack.

use phf::phf_map;

/// Escape character introducing a formatting code.
pub const SENTINEL: char = '§';

/// The sixteen named color codes and their CSS colors.
static COLOR_CODES: phf::Map<char, &'static str> = phf_map! {
    '0' => "#000000", // Black
    '1' => "#0000AA", // Dark Blue
    '2' => "#00AA00", // Dark Green
    '3' => "#00AAAA", // Dark Aqua
    '4' => "#AA0000", // Dark Red
    '5' => "#AA00AA", // Dark Purple
    '6' => "#FFAA00", // Gold
    '7' => "#AAAAAA", // Gray
    '8' => "#555555", // Dark Gray
    '9' => "#5555FF", // Blue
    'a' => "#55FF55", // Green
    'b' => "#55FFFF", // Aqua
    'c' => "#FF5555", // Red
    'd' => "#FF55FF", // Light Purple
    'e' => "#FFFF55", // Yellow
    'f' => "#FFFFFF", // White
};

/// Style cleared by the `r` reset code: explicitly undoes inherited
/// color, weight, decoration and slant.
const RESET_CSS: &str =
    "color: inherit; font-weight: normal; text-decoration: none; font-style: normal";

/// One run of text with an optional inline style and/or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub css: Option<String>,
    pub class: Option<&'static str>,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            css: None,
            class: None,
        }
    }

    fn styled(text: impl Into<String>, css: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            css: Some(css.into()),
            class: None,
        }
    }
}

/// Rewrite HTML-entity-encoded hex colors (`&#RRGGBB`) into sentinel
/// form (`§#RRGGBB`) so the splitter handles both spellings.
fn rewrite_entity_colors(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let is_entity_color = c == '&'
            && chars.get(i + 1) == Some(&'#')
            && chars[i + 2..].len() >= 6
            && chars[i + 2..i + 8].iter().all(|h| h.is_ascii_hexdigit());
        if is_entity_color {
            out.push(SENTINEL);
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a marked-up string into styled spans.
///
/// Text without any sentinel passes through as a single unstyled span
/// (identity). An unrecognized code or malformed hex color is emitted
/// literally, unstyled.
pub fn render(text: &str) -> Vec<Span> {
    let text = rewrite_entity_colors(text);
    let mut segments = text.split(SENTINEL);
    let mut spans = Vec::new();

    // split() always yields at least one segment
    if let Some(first) = segments.next()
        && !first.is_empty()
    {
        spans.push(Span::plain(first));
    }

    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if let Some(rest) = segment.strip_prefix('#') {
            spans.push(render_hex_segment(rest));
            continue;
        }
        let Some(code) = segment.chars().next() else {
            continue;
        };
        let rest = &segment[code.len_utf8()..];
        let code = code.to_ascii_lowercase();
        let span = if let Some(color) = COLOR_CODES.get(&code) {
            Span::styled(rest, format!("color: {color}"))
        } else {
            match code {
                'l' => Span::styled(rest, "font-weight: bold"),
                'n' => Span::styled(rest, "text-decoration: underline"),
                'o' => Span::styled(rest, "font-style: italic"),
                'm' => Span::styled(rest, "text-decoration: line-through"),
                'r' => Span::styled(rest, RESET_CSS),
                'k' => Span {
                    text: rest.to_string(),
                    css: None,
                    class: Some("obfuscated"),
                },
                other => Span::plain(format!("{other}{rest}")),
            }
        };
        spans.push(span);
    }

    spans
}

/// A segment that started with `#`: either a 6-hex-digit RGB color
/// wrapping the remainder, or literal text if the digits are invalid.
fn render_hex_segment(rest: &str) -> Span {
    let hex: String = rest.chars().take(6).collect();
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let remainder: String = rest.chars().skip(6).collect();
        Span::styled(remainder, format!("color: #{hex}"))
    } else {
        Span::plain(format!("#{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("plain"), vec![Span::plain("plain")]);
    }

    #[test]
    fn named_color_code_styles_remainder() {
        let spans = render("a§cb");
        assert_eq!(
            spans,
            vec![Span::plain("a"), Span::styled("b", "color: #FF5555")]
        );
    }

    #[test]
    fn hex_color_valid_and_invalid() {
        assert_eq!(
            render("§#1A2B3Ctext"),
            vec![Span::styled("text", "color: #1A2B3C")]
        );
        assert_eq!(render("§#ZZZZZZtext"), vec![Span::plain("#ZZZZZZtext")]);
    }

    #[test]
    fn entity_encoded_hex_is_rewritten() {
        assert_eq!(
            render("&#FF0000red"),
            vec![Span::styled("red", "color: #FF0000")]
        );
        // A bare ampersand without a hex color stays literal.
        assert_eq!(render("salt & pepper"), vec![Span::plain("salt & pepper")]);
    }

    #[test]
    fn format_codes() {
        assert_eq!(render("§lbold"), vec![Span::styled("bold", "font-weight: bold")]);
        assert_eq!(
            render("§nunder"),
            vec![Span::styled("under", "text-decoration: underline")]
        );
        assert_eq!(
            render("§oital"),
            vec![Span::styled("ital", "font-style: italic")]
        );
        assert_eq!(
            render("§mstruck"),
            vec![Span::styled("struck", "text-decoration: line-through")]
        );
        let obf = render("§khidden");
        assert_eq!(obf[0].class, Some("obfuscated"));
        assert_eq!(obf[0].text, "hidden");
        assert_eq!(render("§rclean"), vec![Span::styled("clean", RESET_CSS)]);
    }

    #[test]
    fn uppercase_codes_are_folded() {
        assert_eq!(
            render("§Cred"),
            vec![Span::styled("red", "color: #FF5555")]
        );
    }

    #[test]
    fn unrecognized_code_is_literal() {
        assert_eq!(render("§zoops"), vec![Span::plain("zoops")]);
    }

    #[test]
    fn styles_do_not_stack_across_segments() {
        let spans = render("§l§cboth");
        // Bold segment is empty after its code and the color segment
        // carries only the color - no combined style.
        assert_eq!(
            spans,
            vec![
                Span::styled("", "font-weight: bold"),
                Span::styled("both", "color: #FF5555"),
            ]
        );
    }

    #[test]
    fn consecutive_sentinels_are_skipped() {
        assert_eq!(
            render("§§cx"),
            vec![Span::styled("x", "color: #FF5555")]
        );
    }
}

//! XML-style markup parsing into styled lines.
//!
//! Markup is a small tag language layered over plain text. The whole input
//! is treated as the content of an implicit root element whose style is the
//! caller's base style; every tag derives its style from its parent.
//!
//! # Tags
//!
//! - `<b>`, `<i>`, `<s>`, `<u>`, `<d>`: bold, italic, strikethrough,
//!   underline, dim.
//! - `<span ...>` with attributes:
//!   - `style="normal|italic|oblique"`
//!   - `weight="normal|bold|light|<number>"`
//!   - `foreground="<color>"` / `background="<color>"`, where a color is a
//!     name, `#rgb`, `#rrggbb`, `#rrggbbaa`, or `default` to clear it
//!   - `underline="none|single|double|low|error"`
//!   - `strikethrough="true|false"`
//! - `<markup>` or any other element name: no style change of its own, but
//!   span attributes are honored.
//!
//! Entities `&lt;` `&gt;` `&amp;` `&quot;` `&apos;` and numeric `&#N;` /
//! `&#xN;` references are decoded. Comments and processing instructions are
//! skipped.
//!
//! Any error aborts the whole parse; no partial result is produced.
//!
//! # Example
//! ```
//! use celltype::{Rgba, Style, parse_markup};
//!
//! let line = parse_markup("<span foreground=\"red\"><b>x</b>y</span>", Style::NONE).unwrap();
//! assert_eq!(line.to_string(), "xy");
//! let cells: Vec<_> = line.cells().collect();
//! assert_eq!(cells[0].style(), Style::fg(Rgba::RED).with_bold());
//! assert_eq!(cells[1].style(), Style::fg(Rgba::RED));
//! ```

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use crate::text::line::Line;
use thiserror::Error;

/// Maximum element nesting depth.
const MAX_DEPTH: usize = 64;

/// Errors that can occur during markup parsing.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// Input ended inside a tag, comment or entity.
    #[error("unexpected end of markup inside construct starting at {position}")]
    UnexpectedEof { position: usize },
    /// Tag syntax could not be parsed.
    #[error("malformed tag at position {position}")]
    MalformedTag { position: usize },
    /// A closing tag does not match the innermost open element.
    #[error("unmatched closing tag </{found}> at position {position}, open element: {expected:?}")]
    UnmatchedTag {
        expected: Option<String>,
        found: String,
        position: usize,
    },
    /// An element was never closed.
    #[error("unclosed tag <{tag}> opened at position {position}")]
    UnclosedTag { tag: String, position: usize },
    /// An attribute has a value it cannot take.
    #[error("invalid value {value:?} for attribute {name:?} at position {position}")]
    InvalidAttribute {
        name: String,
        value: String,
        position: usize,
    },
    /// A color attribute could not be parsed.
    #[error("invalid color {value:?} at position {position}")]
    InvalidColor { value: String, position: usize },
    /// An entity reference is unknown or malformed.
    #[error("invalid entity {entity:?} at position {position}")]
    InvalidEntity { entity: String, position: usize },
    /// Elements are nested too deeply.
    #[error("nesting depth limit exceeded at position {position}")]
    DepthLimitExceeded { position: usize },
}

/// Parse markup into a line, with `base` as the root style.
///
/// # Errors
///
/// Returns a [`MarkupError`] describing the first problem found.
pub fn parse_markup(input: &str, base: Style) -> Result<Line, MarkupError> {
    MarkupParser::new().parse(input, base)
}

#[derive(Debug)]
enum Token<'a> {
    Char(char),
    Open {
        name: &'a str,
        attrs: Vec<(&'a str, String)>,
        self_closing: bool,
        position: usize,
    },
    Close {
        name: &'a str,
        position: usize,
    },
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, MarkupError> {
        loop {
            let rest = &self.input[self.pos..];
            let Some(ch) = rest.chars().next() else {
                return Ok(None);
            };
            match ch {
                '<' if rest.starts_with("<!--") => self.skip_past("-->")?,
                '<' if rest.starts_with("<?") => self.skip_past("?>")?,
                '<' => return self.read_tag().map(Some),
                '&' => {
                    let (decoded, len) = decode_entity(rest, self.pos)?;
                    self.pos += len;
                    return Ok(Some(Token::Char(decoded)));
                }
                _ => {
                    self.pos += ch.len_utf8();
                    return Ok(Some(Token::Char(ch)));
                }
            }
        }
    }

    fn skip_past(&mut self, terminator: &str) -> Result<(), MarkupError> {
        let start = self.pos;
        let end = self.input[start..]
            .find(terminator)
            .ok_or(MarkupError::UnexpectedEof { position: start })?;
        self.pos = start + end + terminator.len();
        Ok(())
    }

    fn read_tag(&mut self) -> Result<Token<'a>, MarkupError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut i = start + 1;
        let mut quote = None;
        let end = loop {
            let Some(&b) = bytes.get(i) else {
                return Err(MarkupError::UnexpectedEof { position: start });
            };
            match (quote, b) {
                (Some(q), _) if b == q => quote = None,
                (Some(_), _) => {}
                (None, b'"' | b'\'') => quote = Some(b),
                (None, b'<') => return Err(MarkupError::MalformedTag { position: start }),
                (None, b'>') => break i,
                _ => {}
            }
            i += 1;
        };
        self.pos = end + 1;

        let body = &self.input[start + 1..end];
        if let Some(name) = body.strip_prefix('/') {
            let name = name.trim_end();
            if !is_valid_name(name) {
                return Err(MarkupError::MalformedTag { position: start });
            }
            return Ok(Token::Close {
                name,
                position: start,
            });
        }

        let (body, self_closing) = match body.strip_suffix('/') {
            Some(inner) => (inner, true),
            None => (body, false),
        };
        let name_end = body.find(char::is_whitespace).unwrap_or(body.len());
        let name = &body[..name_end];
        if !is_valid_name(name) {
            return Err(MarkupError::MalformedTag { position: start });
        }
        let attrs = parse_attributes(&body[name_end..], start)?;
        Ok(Token::Open {
            name,
            attrs,
            self_closing,
            position: start,
        })
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

fn parse_attributes(mut rest: &str, position: usize) -> Result<Vec<(&str, String)>, MarkupError> {
    let malformed = MarkupError::MalformedTag { position };
    let mut attrs: Vec<(&str, String)> = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(attrs);
        }

        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .ok_or_else(|| malformed.clone())?;
        let name = &rest[..name_end];
        if !is_valid_name(name) || attrs.iter().any(|(n, _)| *n == name) {
            return Err(malformed);
        }

        rest = rest[name_end..].trim_start();
        rest = rest.strip_prefix('=').ok_or_else(|| malformed.clone())?.trim_start();
        let quote = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(malformed),
        };
        let value_end = rest[1..].find(quote).ok_or_else(|| malformed.clone())? + 1;
        let value = decode_text(&rest[1..value_end], position)?;
        attrs.push((name, value));
        rest = &rest[value_end + 1..];
    }
}

fn decode_text(raw: &str, position: usize) -> Result<String, MarkupError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let (decoded, len) = decode_entity(&rest[amp..], position)?;
        out.push(decoded);
        rest = &rest[amp + len..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Decode the entity at the start of `rest`, returning the character and the
/// number of bytes consumed.
fn decode_entity(rest: &str, position: usize) -> Result<(char, usize), MarkupError> {
    let Some(semi) = rest.find(';') else {
        return Err(MarkupError::UnexpectedEof { position });
    };
    let name = &rest[1..semi];
    let decoded = match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                None
            }
        }
    };
    match decoded {
        Some(ch) if ch != '\0' => Ok((ch, semi + 1)),
        _ => Err(MarkupError::InvalidEntity {
            entity: rest[..=semi].to_string(),
            position,
        }),
    }
}

#[derive(Debug, Clone)]
struct StyleEntry {
    tag: String,
    position: usize,
    style: Style,
}

/// A markup parser with a reusable style stack.
///
/// Each opening tag pushes the style in effect inside it; each closing tag
/// pops back to the parent's style.
#[derive(Debug, Default)]
pub struct MarkupParser {
    stack: Vec<StyleEntry>,
}

impl MarkupParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse markup into a line, with `base` as the root style.
    ///
    /// # Errors
    ///
    /// Returns a [`MarkupError`] describing the first problem found.
    pub fn parse(&mut self, input: &str, base: Style) -> Result<Line, MarkupError> {
        self.stack.clear();
        let result = self.parse_inner(input, base);
        self.stack.clear();
        if let Err(err) = &result {
            tracing::debug!(%err, "markup parse failed");
        }
        result
    }

    fn parse_inner(&mut self, input: &str, base: Style) -> Result<Line, MarkupError> {
        let mut tokens = Tokenizer::new(input);
        let mut line = Line::new();

        while let Some(token) = tokens.next_token()? {
            let current = self.stack.last().map_or(base, |entry| entry.style);
            match token {
                Token::Char(ch) => line.append_char(ch, current),
                Token::Open {
                    name,
                    attrs,
                    self_closing,
                    position,
                } => {
                    let style = apply_tag(current, name, &attrs, position)?;
                    if self_closing {
                        continue;
                    }
                    if self.stack.len() >= MAX_DEPTH {
                        return Err(MarkupError::DepthLimitExceeded { position });
                    }
                    self.stack.push(StyleEntry {
                        tag: name.to_string(),
                        position,
                        style,
                    });
                }
                Token::Close { name, position } => match self.stack.last() {
                    Some(entry) if entry.tag == name => {
                        self.stack.pop();
                    }
                    open => {
                        return Err(MarkupError::UnmatchedTag {
                            expected: open.map(|entry| entry.tag.clone()),
                            found: name.to_string(),
                            position,
                        });
                    }
                },
            }
        }

        if let Some(entry) = self.stack.last() {
            return Err(MarkupError::UnclosedTag {
                tag: entry.tag.clone(),
                position: entry.position,
            });
        }
        Ok(line)
    }
}

fn apply_tag(
    parent: Style,
    name: &str,
    attrs: &[(&str, String)],
    position: usize,
) -> Result<Style, MarkupError> {
    let mut style = match name {
        "b" => parent.with_attributes(TextAttributes::BOLD),
        "i" => parent.with_attributes(TextAttributes::ITALIC),
        "s" => parent.with_attributes(TextAttributes::STRIKETHROUGH),
        "u" => parent.with_attributes(TextAttributes::UNDERLINE),
        "d" => parent.with_attributes(TextAttributes::DIM),
        _ => parent,
    };

    for (attr, value) in attrs {
        let invalid = || MarkupError::InvalidAttribute {
            name: (*attr).to_string(),
            value: value.clone(),
            position,
        };
        let value_lc = value.trim().to_ascii_lowercase();
        match *attr {
            "style" => {
                let italic = match value_lc.as_str() {
                    "normal" => false,
                    "italic" | "oblique" => true,
                    _ => return Err(invalid()),
                };
                style = style.set_attributes(TextAttributes::ITALIC, italic);
            }
            "weight" => style = apply_weight(style, &value_lc).ok_or_else(invalid)?,
            "foreground" | "fgcolor" | "color" => style.fg = parse_color(value, position)?,
            "background" | "bgcolor" => style.bg = parse_color(value, position)?,
            "underline" => {
                let on = match value_lc.as_str() {
                    "none" | "false" => false,
                    "single" | "double" | "low" | "error" | "true" => true,
                    _ => return Err(invalid()),
                };
                style = style.set_attributes(TextAttributes::UNDERLINE, on);
            }
            "strikethrough" => {
                let on = match value_lc.as_str() {
                    "false" => false,
                    "true" => true,
                    _ => return Err(invalid()),
                };
                style = style.set_attributes(TextAttributes::STRIKETHROUGH, on);
            }
            other => tracing::trace!(attribute = other, tag = name, "ignoring unknown markup attribute"),
        }
    }
    Ok(style)
}

fn apply_weight(style: Style, value: &str) -> Option<Style> {
    let both = TextAttributes::BOLD | TextAttributes::DIM;
    let numeric = value.parse::<u16>().ok();
    let weight = match (value, numeric) {
        (_, Some(n)) if n >= 600 => "bold",
        (_, Some(n)) if n < 400 => "light",
        (_, Some(_)) => "normal",
        (v, None) => v,
    };
    match weight {
        "bold" | "semibold" | "ultrabold" | "heavy" => {
            Some(style.without_attributes(both).with_attributes(TextAttributes::BOLD))
        }
        "light" | "ultralight" | "thin" => {
            Some(style.without_attributes(both).with_attributes(TextAttributes::DIM))
        }
        "normal" | "book" | "regular" | "medium" => Some(style.without_attributes(both)),
        _ => None,
    }
}

/// Parse a color attribute; `default` clears the color.
fn parse_color(value: &str, position: usize) -> Result<Option<Rgba>, MarkupError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("default") {
        return Ok(None);
    }
    Rgba::parse(trimmed)
        .map(Some)
        .ok_or_else(|| MarkupError::InvalidColor {
            value: value.to_string(),
            position,
        })
}

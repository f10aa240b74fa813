//! Line breaking.
//!
//! A source line is first split at literal newlines. Each physical line is
//! then broken according to a [`WrapMode`]:
//!
//! - `None`: truncate at the width, optionally ending in `…`.
//! - `Char`: break at any character boundary. Nothing is dropped, so the
//!   pieces concatenate back to the physical line.
//! - `Word`: break between words. A space run that would overflow is dropped
//!   and forces the break, as is a space run left at the end of a broken
//!   line. A line with no space run is truncated.
//! - `WordChar`: like `Word`, or like `Char` when a line has no space run.
//!
//! Without a width, lines are only split at newlines.

use crate::text::layout::WrapMode;
use crate::text::line::Line;
use crate::text::word::{Word, cell_columns};

/// Break `line` into display lines no wider than `max_chars` columns.
#[must_use]
pub fn wrap(line: &Line, mode: WrapMode, max_chars: Option<usize>, ellipsize: bool) -> Vec<Line> {
    let physical = line.split_newlines();
    let Some(max) = max_chars else {
        return physical;
    };

    let mut out = Vec::with_capacity(physical.len());
    for line in &physical {
        match mode {
            WrapMode::None => out.push(truncate(line, max, ellipsize)),
            WrapMode::Char => char_wrap(line, max, &mut out),
            WrapMode::Word if line.has_space_run() => word_wrap(line, max, &mut out),
            WrapMode::Word => out.push(truncate(line, max, false)),
            WrapMode::WordChar if line.has_space_run() => word_wrap(line, max, &mut out),
            WrapMode::WordChar => char_wrap(line, max, &mut out),
        }
    }
    out
}

/// Keep the longest prefix that fits in `max` columns.
///
/// With `ellipsize`, the last visible character of a truncated line is
/// replaced by `…`, keeping that character's style.
#[must_use]
pub fn truncate(line: &Line, max: usize, ellipsize: bool) -> Line {
    if line.len() <= max {
        return line.clone();
    }

    let mut out = Line::new();
    let mut remaining = max;
    for word in line.words() {
        let mut piece = word.clone();
        let cut = piece.truncate_columns(remaining);
        remaining -= piece.len();
        out.push_word(piece);
        if cut {
            break;
        }
    }

    if ellipsize {
        let words = out.words_mut();
        while let Some(last) = words.last_mut() {
            if last.ellipsize_tail() {
                break;
            }
            words.pop();
        }
    }
    out
}

fn char_wrap(line: &Line, max: usize, out: &mut Vec<Line>) {
    let max = max.max(1);
    let mut current = Line::new();
    let mut used = 0usize;

    for word in line.words() {
        let mut piece = Word::new();
        let mut piece_width = 0usize;
        for cell in word.cells() {
            let cols = cell_columns(cell);
            let filled = used + piece_width;
            if filled > 0 && filled + cols > max {
                current.push_word(std::mem::take(&mut piece));
                out.push(std::mem::take(&mut current));
                used = 0;
                piece_width = 0;
            }
            piece.push(*cell);
            piece_width += cols;
        }
        current.push_word(piece);
        used += piece_width;
    }
    out.push(current);
}

fn word_wrap(line: &Line, max: usize, out: &mut Vec<Line>) {
    let mut current = Line::new();
    let mut used = 0usize;

    for word in line.words() {
        let width = word.len();
        if used + width <= max {
            current.push_word(word.clone());
            used += width;
            continue;
        }

        if word.is_space() {
            if !current.is_empty() {
                break_line(&mut current, out);
                used = 0;
            }
            continue;
        }

        if !current.is_empty() {
            break_line(&mut current, out);
        }
        let mut word = word.clone();
        word.truncate_columns(max);
        used = word.len();
        current.push_word(word);
    }
    out.push(current);
}

fn break_line(current: &mut Line, out: &mut Vec<Line>) {
    let words = current.words_mut();
    if words.last().is_some_and(Word::is_space) {
        words.pop();
    }
    out.push(std::mem::take(current));
}

//! Horizontal justification of wrapped lines.

use crate::text::layout::Justify;
use crate::text::line::Line;
use crate::text::word::Word;

/// Justify wrapped lines against `max_chars`, or against the widest line
/// when no width is given.
///
/// Padding is made of nil placeholder cells, so it never paints over what
/// lies beneath the text.
#[must_use]
pub fn justify(mut lines: Vec<Line>, mode: Justify, max_chars: Option<usize>) -> Vec<Line> {
    if mode == Justify::Left {
        for line in &mut lines {
            strip_leading_space(line);
        }
        return lines;
    }
    if mode == Justify::None {
        return lines;
    }

    let target = max_chars.unwrap_or_else(|| lines.iter().map(Line::len).max().unwrap_or(0));
    for line in &mut lines {
        let deficit = target.saturating_sub(line.len());
        if deficit == 0 {
            continue;
        }
        match mode {
            Justify::Right => line.insert_word(0, Word::placeholder(deficit)),
            Justify::Center => {
                let pad = deficit / 2;
                if pad > 0 {
                    line.insert_word(0, Word::placeholder(pad));
                }
            }
            Justify::Fill => fill(line, deficit),
            Justify::None | Justify::Left => {}
        }
    }
    lines
}

fn strip_leading_space(line: &mut Line) {
    let words = line.words_mut();
    let leading = words.iter().take_while(|w| w.is_space()).count();
    words.drain(..leading);
}

/// Spread `deficit` extra columns over the line's inter-word gaps.
///
/// Columns are handed out one at a time, alternating between the front-most
/// and back-most gaps and moving inward, so every gap grows by the same
/// amount give or take one.
fn fill(line: &mut Line, deficit: usize) {
    let gaps: Vec<usize> = line
        .words()
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_space())
        .map(|(i, _)| i)
        .collect();
    if gaps.is_empty() {
        return;
    }

    let mut order = Vec::with_capacity(gaps.len());
    let (mut lo, mut hi) = (0usize, gaps.len() - 1);
    while lo <= hi {
        order.push(gaps[lo]);
        if hi != lo {
            order.push(gaps[hi]);
        }
        lo += 1;
        if hi == 0 {
            break;
        }
        hi -= 1;
    }

    let mut extra = vec![0usize; line.words().len()];
    for step in 0..deficit {
        extra[order[step % order.len()]] += 1;
    }
    for (word, n) in line.words_mut().iter_mut().zip(extra) {
        if n > 0 {
            word.grow(n);
        }
    }
}

//! Assertion helpers for surfaces and laid-out lines.

use celltype::{Line, Style, Surface};
use std::fmt::Write;

/// Characters of row `y`, one per cell; nil cells show as `·`.
pub fn surface_row(surface: &Surface, y: i32) -> String {
    (0..surface.size().width as i32)
        .map(|x| {
            let cell = surface.get_content(x, y).expect("row in bounds");
            if cell.is_nil() { '·' } else { cell.value() }
        })
        .collect()
}

/// Every row of a surface.
pub fn surface_rows(surface: &Surface) -> Vec<String> {
    (0..surface.size().height as i32)
        .map(|y| surface_row(surface, y))
        .collect()
}

/// Text of each laid-out line.
pub fn line_texts(lines: &[Line]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

/// Assert that a surface shows exactly `expected`, row by row.
#[track_caller]
pub fn assert_surface_rows(surface: &Surface, expected: &[&str]) {
    let actual = surface_rows(surface);
    if actual.len() != expected.len() || actual.iter().zip(expected).any(|(a, e)| a != e) {
        let mut report = String::new();
        for (y, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            let marker = if a == e { ' ' } else { '!' };
            let _ = writeln!(report, "{marker} {y:>2} expected {e:?} got {a:?}");
        }
        panic!(
            "surface mismatch ({} rows, expected {}):\n{report}",
            actual.len(),
            expected.len()
        );
    }
}

/// Assert the style of one cell.
#[track_caller]
pub fn assert_cell_style(surface: &Surface, x: i32, y: i32, expected: Style) {
    let cell = surface.get_content(x, y).expect("cell in bounds");
    assert_eq!(
        cell.style(),
        expected,
        "style mismatch at ({x}, {y}) for {:?}",
        cell.value()
    );
}

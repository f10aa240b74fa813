//! Markup styles carried through layout, drawing and rendering.

mod fixtures;

use celltype::{
    Error, Justify, MarkupError, MemoryRenderer, Point, Rgba, Size, Style, Surface,
    TextAttributes, TextBuffer, TextLayout, WrapMode, parse_markup,
};
use fixtures::{assert_cell_style, assert_surface_rows, line_texts, setup_test_logging};

fn draw(markup: &str, width: u32, height: u32, layout: &TextLayout) -> Surface {
    let surface = Surface::new(Point::ZERO, Size::new(width, height), Style::NONE);
    let text = TextBuffer::from_markup(markup, Style::NONE).unwrap();
    surface
        .draw_text(Point::ZERO, Size::new(width, height), &text, layout)
        .unwrap();
    surface
}

#[test]
fn nested_span_and_bold() {
    setup_test_logging();
    let surface = draw(
        r#"<span foreground="red"><b>x</b>y</span>"#,
        2,
        1,
        &TextLayout::new(),
    );
    assert_surface_rows(&surface, &["xy"]);
    assert_cell_style(&surface, 0, 0, Style::fg(Rgba::RED).with_bold());
    assert_cell_style(&surface, 1, 0, Style::fg(Rgba::RED));
}

#[test]
fn styles_reach_the_screen() {
    let surface = draw(
        r#"<i>a</i><span background="blue">b</span><u>c</u>"#,
        3,
        1,
        &TextLayout::new(),
    );
    let mut screen = MemoryRenderer::new(3, 1);
    surface.render(&mut screen);

    assert_eq!(screen.row_text(0), "abc");
    let style_at = |x| screen.content(x, 0).map(|c| c.style);
    assert_eq!(style_at(0), Some(Style::attrs(TextAttributes::ITALIC)));
    assert_eq!(style_at(1), Some(Style::bg(Rgba::BLUE)));
    assert_eq!(style_at(2), Some(Style::underline()));
}

#[test]
fn styles_survive_word_wrap() {
    let text = TextBuffer::from_markup("plain <b>bold words</b> end", Style::NONE).unwrap();
    let layout = TextLayout::new().wrap(WrapMode::Word);
    let lines = text.layout(&layout.key(Some(10)));
    assert_eq!(line_texts(&lines), vec!["plain bold", "words end"]);

    let second: Vec<_> = lines[1].cells().collect();
    assert_eq!(second[0].style(), Style::bold());
    assert_eq!(second[4].style(), Style::bold());
    // The space after </b> is unstyled.
    assert_eq!(second[5].style(), Style::NONE);
}

#[test]
fn centered_markup_over_filled_background() {
    let surface = Surface::with_fill(Point::ZERO, Size::new(7, 1), Style::NONE, '-');
    let text = TextBuffer::from_markup("<b>ab</b>c", Style::NONE).unwrap();
    let layout = TextLayout::new()
        .justify(Justify::Center)
        .fill_style(Style::bg(Rgba::BLACK));
    surface
        .draw_text(Point::ZERO, Size::new(7, 1), &text, &layout)
        .unwrap();
    assert_surface_rows(&surface, &["  abc  "]);
    assert_cell_style(&surface, 0, 0, Style::bg(Rgba::BLACK));
    assert_cell_style(&surface, 2, 0, Style::bold());
}

#[test]
fn base_style_flows_into_tags() {
    let base = Style::fg(Rgba::GREEN);
    let line = parse_markup(r#"a<span weight="light">b</span>"#, base).unwrap();
    let styles: Vec<_> = line.cells().map(|c| c.style()).collect();
    assert_eq!(styles[0], base);
    assert_eq!(styles[1], base.with_attributes(TextAttributes::DIM));
}

#[test]
fn bad_markup_is_reported_and_keeps_content() {
    let err = TextBuffer::from_markup("<b>open", Style::NONE).unwrap_err();
    assert!(matches!(
        err,
        Error::Markup(MarkupError::UnclosedTag { ref tag, .. }) if tag == "b"
    ));

    let mut text = TextBuffer::from_markup("<i>kept</i>", Style::NONE).unwrap();
    let err = text
        .set_markup(r#"<span foreground="nope">x</span>"#)
        .unwrap_err();
    assert!(matches!(err, Error::Markup(MarkupError::InvalidColor { .. })));
    assert_eq!(text.text(), "kept");
    assert!(text.is_markup());
}

#[test]
fn base_style_change_restyles_markup() {
    let mut text = TextBuffer::from_markup("<b>a</b>b", Style::NONE).unwrap();
    text.set_style(Style::fg(Rgba::WHITE)).unwrap();

    let surface = Surface::new(Point::ZERO, Size::new(2, 1), Style::NONE);
    surface
        .draw_text(Point::ZERO, Size::new(2, 1), &text, &TextLayout::new())
        .unwrap();
    assert_cell_style(&surface, 0, 0, Style::fg(Rgba::WHITE).with_bold());
    assert_cell_style(&surface, 1, 0, Style::fg(Rgba::WHITE));
}

#[test]
fn entities_are_drawn_literally() {
    let surface = draw("&lt;a&amp;b&gt;", 5, 1, &TextLayout::new());
    assert_surface_rows(&surface, &["<a&b>"]);
}

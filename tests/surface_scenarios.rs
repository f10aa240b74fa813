//! End-to-end scenarios: text drawn onto surfaces, boxes, compositing and
//! rendering against an in-memory screen.

mod fixtures;

use celltype::{
    BoxOptions, BoxRunes, Cell, Justify, MemoryRenderer, Point, Rect, Rgba, Size, Style, Surface,
    TextAttributes, TextBuffer, TextLayout, VAlign, WrapMode,
};
use fixtures::{RecordingRenderer, assert_cell_style, assert_surface_rows, setup_test_logging};

// ============================================================================
// Text Placement
// ============================================================================

mod text_placement {
    use super::*;

    fn draw_test_word(valign: VAlign) -> Surface {
        let canvas = Surface::new(Point::ZERO, Size::new(10, 3), Style::NONE);
        let text = TextBuffer::new("test", Style::NONE);
        let layout = TextLayout::new()
            .wrap(WrapMode::None)
            .justify(Justify::Left)
            .valign(valign);
        canvas
            .draw_text(Point::ZERO, Size::new(10, 3), &text, &layout)
            .unwrap();
        canvas
    }

    #[test]
    fn single_line_top() {
        setup_test_logging();
        let canvas = draw_test_word(VAlign::Top);
        assert_surface_rows(&canvas, &["test      ", "          ", "          "]);
    }

    #[test]
    fn single_line_middle() {
        let canvas = draw_test_word(VAlign::Middle);
        assert_surface_rows(&canvas, &["          ", "test      ", "          "]);
    }

    #[test]
    fn single_line_bottom() {
        let canvas = draw_test_word(VAlign::Bottom);
        assert_surface_rows(&canvas, &["          ", "          ", "test      "]);
    }

    #[test]
    fn justified_paragraph() {
        let canvas = Surface::with_fill(Point::ZERO, Size::new(12, 4), Style::NONE, '.');
        let text = TextBuffer::new("the quick brown fox jumps", Style::NONE);
        let layout = TextLayout::new().wrap(WrapMode::Word).justify(Justify::Fill);
        canvas
            .draw_text(Point::new(1, 1), Size::new(10, 3), &text, &layout)
            .unwrap();
        assert_surface_rows(
            &canvas,
            &[
                "............",
                ".the  quick.",
                ".brown  fox.",
                ".jumps     .",
            ],
        );
    }

    #[test]
    fn ellipsized_label() {
        let canvas = Surface::new(Point::ZERO, Size::new(6, 1), Style::NONE);
        let text = TextBuffer::new("overflowing", Style::bold());
        let layout = TextLayout::new().ellipsize(true);
        canvas
            .draw_text(Point::ZERO, Size::new(6, 1), &text, &layout)
            .unwrap();
        assert_surface_rows(&canvas, &["overf…"]);
        assert_cell_style(&canvas, 5, 0, Style::bold());
    }

    #[test]
    fn mnemonic_underlines_marked_char() {
        let canvas = Surface::new(Point::ZERO, Size::new(6, 1), Style::NONE);
        let text = TextBuffer::new("_Save", Style::NONE);
        let layout = TextLayout::new().mnemonic(true);
        canvas
            .draw_text(Point::ZERO, Size::new(6, 1), &text, &layout)
            .unwrap();
        assert_surface_rows(&canvas, &["Save  "]);
        assert_cell_style(&canvas, 0, 0, Style::underline());
        assert_cell_style(&canvas, 1, 0, Style::NONE);
    }

    #[test]
    fn selection_is_highlighted() {
        let canvas = Surface::new(Point::ZERO, Size::new(5, 1), Style::NONE);
        let mut text = TextBuffer::new("abcde", Style::NONE);
        text.select(1..3);
        canvas
            .draw_text(Point::ZERO, Size::new(5, 1), &text, &TextLayout::new())
            .unwrap();
        assert_cell_style(&canvas, 0, 0, Style::NONE);
        assert_cell_style(&canvas, 1, 0, Style::inverse());
        assert_cell_style(&canvas, 2, 0, Style::inverse());
        assert_cell_style(&canvas, 3, 0, Style::NONE);
    }

    #[test]
    fn right_padding_shows_erase_rune() {
        let canvas = Surface::with_fill(Point::ZERO, Size::new(5, 1), Style::NONE, '.');
        let text = TextBuffer::new("ab", Style::NONE);
        let layout = TextLayout::new().justify(Justify::Right).erase('_');
        canvas
            .draw_text(Point::ZERO, Size::new(5, 1), &text, &layout)
            .unwrap();
        assert_surface_rows(&canvas, &["___ab"]);
    }
}

// ============================================================================
// Boxes
// ============================================================================

mod boxes {
    use super::*;

    #[test]
    fn bordered_filled_box() {
        let canvas = Surface::new(Point::ZERO, Size::new(5, 3), Style::NONE);
        let options = BoxOptions::new()
            .fill(true)
            .fill_rune('#')
            .border_style(Style::fg(Rgba::CYAN))
            .content_style(Style::bg(Rgba::BLUE));
        canvas.draw_box(Rect::new(0, 0, 5, 3), &options);

        assert_surface_rows(&canvas, &["┌───┐", "│###│", "└───┘"]);

        let corners: Vec<char> = [(0, 0), (4, 0), (0, 2), (4, 2)]
            .iter()
            .map(|&(x, y)| canvas.get_content(x, y).unwrap().value())
            .collect();
        for (i, a) in corners.iter().enumerate() {
            for b in &corners[i + 1..] {
                assert_ne!(a, b, "corners must be distinct");
            }
        }
        assert_cell_style(&canvas, 0, 0, Style::fg(Rgba::CYAN));
        assert_cell_style(&canvas, 2, 1, Style::bg(Rgba::BLUE));
    }

    #[test]
    fn heavy_box_offset() {
        let canvas = Surface::new(Point::ZERO, Size::new(6, 4), Style::NONE);
        canvas.draw_box(
            Rect::new(1, 1, 4, 3),
            &BoxOptions::new().runes(BoxRunes::heavy()),
        );
        assert_surface_rows(&canvas, &["      ", " ┏━━┓ ", " ┃  ┃ ", " ┗━━┛ "]);
    }

    #[test]
    fn overlay_preserves_dim_background() {
        let under = Style::bg(Rgba::BLUE).with_attributes(TextAttributes::DIM);
        let canvas = Surface::new(Point::ZERO, Size::new(3, 3), under);
        let options = BoxOptions::new()
            .overlay(true)
            .border_style(Style::fg(Rgba::WHITE));
        canvas.draw_box(Rect::new(0, 0, 3, 3), &options);

        let expected = Style::fg(Rgba::WHITE)
            .with_bg(Rgba::BLUE)
            .with_attributes(TextAttributes::DIM);
        assert_cell_style(&canvas, 1, 0, expected);
    }
}

// ============================================================================
// Compositing
// ============================================================================

mod compositing {
    use super::*;

    #[test]
    fn child_composited_at_relative_origin() {
        let parent = Surface::with_fill(Point::new(5, 5), Size::new(6, 3), Style::NONE, '.');
        let child = Surface::new(Point::new(7, 6), Size::new(3, 1), Style::NONE);
        child.draw_string(Point::ZERO, "abc", Style::NONE);

        parent.composite(&child).unwrap();
        assert_surface_rows(&parent, &["......", "..abc.", "......"]);
    }

    #[test]
    fn child_partially_outside_is_clipped() {
        let parent = Surface::with_fill(Point::ZERO, Size::new(3, 2), Style::NONE, '.');
        let child = Surface::with_fill(Point::new(-1, 1), Size::new(3, 3), Style::NONE, 'x');

        parent.composite(&child).unwrap();
        assert_surface_rows(&parent, &["...", "xx."]);
    }

    #[test]
    fn text_over_existing_content_keeps_padding_transparent() {
        let base = Surface::with_fill(Point::ZERO, Size::new(6, 1), Style::NONE, '=');
        let overlay = Surface::with_fill(Point::ZERO, Size::new(6, 1), Style::NONE, '\0');
        overlay.set_content(2, 0, 'o', Style::bold()).unwrap();

        base.composite(&overlay).unwrap();
        assert_surface_rows(&base, &["==o==="]);
        assert_cell_style(&base, 2, 0, Style::bold());
    }

    #[test]
    fn load_data_then_composite() {
        let source = Surface::new(Point::ZERO, Size::new(1, 1), Style::NONE);
        source.load_data(vec![
            vec![Cell::new('a', Style::NONE), Cell::new('b', Style::NONE)],
            vec![Cell::new('c', Style::NONE), Cell::new('d', Style::NONE)],
        ]);
        assert_eq!(source.size(), Size::new(2, 2));

        let target = Surface::new(Point::ZERO, Size::new(2, 2), Style::NONE);
        target.composite(&source).unwrap();
        assert_surface_rows(&target, &["ac", "bd"]);
        assert!(target.equals(false, &source));
    }
}

// ============================================================================
// Rendering
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn render_is_idempotent() {
        setup_test_logging();
        let surface = Surface::new(Point::ZERO, Size::new(8, 2), Style::NONE);
        let text = TextBuffer::from_markup("<b>hi</b> you", Style::NONE).unwrap();
        surface
            .draw_text(Point::ZERO, Size::new(8, 2), &text, &TextLayout::new())
            .unwrap();

        let mut screen = RecordingRenderer::new(8, 2);
        let first = surface.render(&mut screen);
        assert!(first.written > 0);
        assert_eq!(screen.row_text(0), "hi you  ");

        screen.take_log();
        let second = surface.render(&mut screen);
        assert_eq!(second.written, 0);
        assert!(screen.log.is_empty());
    }

    #[test]
    fn render_writes_only_changed_cells() {
        let surface = Surface::new(Point::ZERO, Size::new(4, 1), Style::NONE);
        surface.draw_string(Point::ZERO, "abcd", Style::NONE);
        let mut screen = RecordingRenderer::new(4, 1);
        surface.render(&mut screen);
        screen.take_log();

        surface.set_content(2, 0, 'X', Style::bold()).unwrap();
        surface.render(&mut screen);
        let log = screen.take_log();
        assert_eq!(log.len(), 1);
        assert_eq!((log[0].x, log[0].y, log[0].ch), (2, 0, 'X'));
        assert_eq!(log[0].style, Style::bold());
        assert_eq!(screen.row_text(0), "abXd");
    }

    #[test]
    fn render_respects_origin() {
        let surface = Surface::new(Point::new(2, 1), Size::new(2, 1), Style::NONE);
        surface.draw_string(Point::ZERO, "ok", Style::NONE);
        let mut screen = MemoryRenderer::new(5, 3);
        surface.render(&mut screen);
        assert_eq!(screen.screen_text(), "     \n  ok \n     ");
    }

    #[test]
    fn shared_surface_drawn_from_threads() {
        use std::sync::Arc;

        let surface = Arc::new(Surface::new(Point::ZERO, Size::new(4, 4), Style::NONE));
        let handles: Vec<_> = (0..4)
            .map(|row| {
                let surface = Arc::clone(&surface);
                std::thread::spawn(move || {
                    let text = TextBuffer::new(&format!("r{row}"), Style::NONE);
                    surface
                        .draw_text(Point::new(0, row), Size::new(4, 1), &text, &TextLayout::new())
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_surface_rows(&surface, &["r0  ", "r1  ", "r2  ", "r3  "]);
    }
}

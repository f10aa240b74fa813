//! Property-based tests for compositing and incremental rendering.

mod fixtures;

use celltype::{
    BoxOptions, MemoryRenderer, Point, Rect, Rgba, Size, Style, Surface, TextBuffer, TextLayout,
    WrapMode,
};
use fixtures::RecordingRenderer;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn style_strategy() -> impl Strategy<Value = Style> {
    prop::sample::select(vec![
        Style::NONE,
        Style::bold(),
        Style::fg(Rgba::RED),
        Style::bg(Rgba::BLUE).with_underline(),
    ])
}

fn dim_strategy() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=16, 1u32..=8)
}

/// A drawing operation applied to a surface.
#[derive(Clone, Debug)]
enum Op {
    Set(i32, i32, char, Style),
    Text(i32, i32, String),
    Box(i32, i32, u32, u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-2i32..18, -2i32..10, prop::char::range('a', 'z'), style_strategy())
            .prop_map(|(x, y, ch, style)| Op::Set(x, y, ch, style)),
        (-2i32..18, -2i32..10, "[a-z 漢]{0,12}").prop_map(|(x, y, s)| Op::Text(x, y, s)),
        (-2i32..18, -2i32..10, 0u32..8, 0u32..6).prop_map(|(x, y, w, h)| Op::Box(x, y, w, h)),
    ]
}

fn apply(surface: &Surface, op: &Op) {
    match op {
        Op::Set(x, y, ch, style) => {
            let _ = surface.set_content(*x, *y, *ch, *style);
        }
        Op::Text(x, y, text) => {
            let buffer = TextBuffer::new(text, Style::NONE);
            let layout = TextLayout::new().wrap(WrapMode::WordChar);
            let _ = surface.draw_text(Point::new(*x, *y), Size::new(6, 2), &buffer, &layout);
        }
        Op::Box(x, y, w, h) => {
            surface.draw_box(Rect::new(*x, *y, *w, *h), &BoxOptions::new().fill(true));
        }
    }
}

// ============================================================================
// Rendering Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A second render with nothing changed writes nothing.
    #[test]
    fn rerender_is_idempotent(
        (w, h) in dim_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let surface = Surface::new(Point::ZERO, Size::new(w, h), Style::NONE);
        for op in &ops {
            apply(&surface, op);
        }

        let mut screen = RecordingRenderer::new(w, h);
        surface.render(&mut screen);
        screen.take_log();

        let stats = surface.render(&mut screen);
        prop_assert_eq!(stats.written, 0);
        prop_assert!(screen.log.is_empty());
    }

    /// Render statistics stay within the surface and dirty cells are kept.
    #[test]
    fn render_stats_are_bounded(
        (w, h) in dim_strategy(),
        (ox, oy) in (-4i32..4, -4i32..4),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let surface = Surface::new(Point::new(ox, oy), Size::new(w, h), Style::NONE);
        for op in &ops {
            apply(&surface, op);
        }
        let mut screen = MemoryRenderer::new(w + 4, h + 4);
        let first = surface.render(&mut screen);
        prop_assert!(first.examined <= (w * h) as usize);
        prop_assert!(first.written + first.offscreen <= first.examined);
        prop_assert_eq!(screen.writes(), first.written);

        let second = surface.render(&mut screen);
        prop_assert_eq!(second.examined, first.examined);
        prop_assert_eq!(second.offscreen, first.offscreen);
        prop_assert_eq!(second.written, 0);
    }
}

// ============================================================================
// Compositing Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Compositing an all-nil surface leaves the target unchanged.
    #[test]
    fn nil_surface_is_transparent(
        (w, h) in dim_strategy(),
        (sw, sh) in dim_strategy(),
        (ox, oy) in (-8i32..8, -8i32..8),
        ops in prop::collection::vec(op_strategy(), 0..8),
    ) {
        let target = Surface::new(Point::ZERO, Size::new(w, h), Style::NONE);
        for op in &ops {
            apply(&target, op);
        }
        let before = target.data();

        let nil = Surface::with_fill(Point::new(ox, oy), Size::new(sw, sh), Style::bold(), '\0');
        target.composite(&nil).unwrap();
        prop_assert_eq!(target.data(), before);
    }

    /// Compositing a surface onto an equal-sized one at the same origin
    /// makes their contents equal.
    #[test]
    fn composite_copies_opaque_surface(
        (w, h) in dim_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..8),
    ) {
        let src = Surface::new(Point::new(3, 2), Size::new(w, h), Style::NONE);
        for op in &ops {
            apply(&src, op);
        }
        let dst = Surface::with_fill(Point::new(3, 2), Size::new(w, h), Style::bold(), '#');
        dst.composite(&src).unwrap();
        prop_assert!(dst.equals(false, &src));
    }
}

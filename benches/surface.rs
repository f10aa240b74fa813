//! Surface drawing, compositing and rendering benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use celltype::{
    BoxOptions, Justify, MemoryRenderer, Point, Rect, Rgba, Size, Style, Surface, TextBuffer,
    TextLayout, WrapMode,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn surface_creation(c: &mut Criterion) {
    c.bench_function("surface_new_80x24", |b| {
        b.iter(|| Surface::new(Point::ZERO, black_box(Size::new(80, 24)), Style::NONE));
    });

    c.bench_function("surface_new_200x50", |b| {
        b.iter(|| Surface::new(Point::ZERO, black_box(Size::new(200, 50)), Style::NONE));
    });
}

fn surface_drawing(c: &mut Criterion) {
    let surface = Surface::new(Point::ZERO, Size::new(80, 24), Style::NONE);
    let options = BoxOptions::new().fill(true).border_style(Style::fg(Rgba::CYAN));

    c.bench_function("surface_draw_box", |b| {
        b.iter(|| surface.draw_box(black_box(Rect::new(2, 2, 60, 18)), &options));
    });

    c.bench_function("surface_draw_string", |b| {
        b.iter(|| surface.draw_string(Point::new(1, 1), black_box("Hello, World!"), Style::bold()));
    });

    let text = TextBuffer::new(&"lorem ipsum dolor sit amet ".repeat(30), Style::NONE);
    let layout = TextLayout::new().wrap(WrapMode::Word).justify(Justify::Fill);
    c.bench_function("surface_draw_text_paragraph", |b| {
        b.iter(|| surface.draw_text(Point::new(4, 4), Size::new(50, 12), black_box(&text), &layout));
    });
}

fn surface_composite(c: &mut Criterion) {
    let parent = Surface::new(Point::ZERO, Size::new(200, 50), Style::NONE);
    let child = Surface::new(Point::new(10, 5), Size::new(80, 24), Style::bg(Rgba::BLUE));

    c.bench_function("surface_composite_80x24", |b| {
        b.iter(|| parent.composite(black_box(&child)));
    });
}

fn surface_render(c: &mut Criterion) {
    let surface = Surface::new(Point::ZERO, Size::new(80, 24), Style::NONE);
    surface.draw_box(Rect::new(0, 0, 80, 24), &BoxOptions::new());

    c.bench_function("surface_render_full", |b| {
        b.iter(|| {
            let mut screen = MemoryRenderer::new(80, 24);
            surface.render(&mut screen)
        });
    });

    let mut screen = MemoryRenderer::new(80, 24);
    surface.render(&mut screen);
    c.bench_function("surface_render_unchanged", |b| {
        b.iter(|| surface.render(black_box(&mut screen)));
    });
}

criterion_group!(
    benches,
    surface_creation,
    surface_drawing,
    surface_composite,
    surface_render
);
criterion_main!(benches);

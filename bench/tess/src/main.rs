#[macro_use]
extern crate bencher;

use tessera::geom::{Circle, Color, FloatRect, Polyline, RoundRect};
use tessera::math::{point, Point};
use tessera::tessellation::*;

use bencher::Bencher;

const N: usize = 100;

fn zigzag(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| point(i as f32 * 10.0, if i % 2 == 0 { 0.0 } else { 25.0 }))
        .collect()
}

fn fill_circles(bench: &mut Bencher) {
    let mut buffers = VertexBuffers::with_capacity(8192, 24576);

    bench.iter(|| {
        for _ in 0..N {
            buffers.clear();
            for i in 0..100 {
                let circle = Circle::new(point(i as f32, 0.0), 1.0 + i as f32);
                fill_circle(&mut buffers, &circle, Color::WHITE, Color::BLACK, 1.0);
            }
        }
    })
}

fn fill_round_rects(bench: &mut Bencher) {
    let mut buffers = VertexBuffers::with_capacity(8192, 24576);

    bench.iter(|| {
        for _ in 0..N {
            buffers.clear();
            for i in 0..100 {
                let rect = FloatRect::new(0.0, 0.0, 200.0, 100.0);
                fill_round_rect(&mut buffers, &RoundRect::new(rect, i as f32), Color::WHITE, 1.0);
            }
        }
    })
}

fn stroke_open_line_string(bench: &mut Bencher) {
    let points = zigzag(1000);
    let mut buffers = VertexBuffers::with_capacity(4096, 12288);
    let mut scratch = ScratchBuffer::with_capacity(2048);
    let options = StrokeOptions::thickness(3.0).with_line_cap(LineCap::Round);

    bench.iter(|| {
        for _ in 0..N {
            buffers.clear();
            stroke_line_string(
                &mut buffers,
                &mut scratch,
                &Polyline::open(&points),
                &options,
                Color::WHITE,
            );
        }
    })
}

fn stroke_closed_line_string(bench: &mut Bencher) {
    let points = zigzag(1000);
    let mut buffers = VertexBuffers::with_capacity(4096, 12288);
    let mut scratch = ScratchBuffer::with_capacity(2048);
    let options = StrokeOptions::thickness(3.0);

    bench.iter(|| {
        for _ in 0..N {
            buffers.clear();
            stroke_line_string(
                &mut buffers,
                &mut scratch,
                &Polyline::closed(&points),
                &options,
                Color::WHITE,
            );
        }
    })
}

fn stroke_dotted_line_string(bench: &mut Bencher) {
    let points = zigzag(1000);
    let mut buffers = VertexBuffers::with_capacity(4096, 12288);
    let mut scratch = ScratchBuffer::with_capacity(2048);
    let options = StrokeOptions::thickness(3.0).with_style(LineStyle::ROUND_DOT);

    bench.iter(|| {
        for _ in 0..N {
            buffers.clear();
            stroke_line_string(
                &mut buffers,
                &mut scratch,
                &Polyline::open(&points),
                &options,
                Color::WHITE,
            );
        }
    })
}

fn shadows(bench: &mut Bencher) {
    let mut buffers = VertexBuffers::with_capacity(8192, 24576);
    let options = ShadowOptions::blur(12.0);
    let rect = FloatRect::new(0.0, 0.0, 200.0, 100.0);

    bench.iter(|| {
        for _ in 0..N {
            buffers.clear();
            fill_rect_shadow(&mut buffers, &rect, &options, Color::BLACK);
            fill_circle_shadow(&mut buffers, &Circle::new(point(0.0, 0.0), 50.0), &options, Color::BLACK);
            fill_round_rect_shadow(&mut buffers, &RoundRect::new(rect, 20.0), &options, Color::BLACK);
        }
    })
}

benchmark_group!(fill,
  fill_circles,
  fill_round_rects
);

benchmark_group!(stroke,
  stroke_open_line_string,
  stroke_closed_line_string,
  stroke_dotted_line_string
);

benchmark_group!(shadow,
  shadows
);

benchmark_main!(fill, stroke, shadow);

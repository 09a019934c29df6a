use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gradient_mesh::bench::{FrameBuffer, Rasterizer, ScanlineRasterizer};
use gradient_mesh::colors::Color;
use gradient_mesh::mesh::{Triangle, Vertex};
use gradient_mesh::render::FrameRenderer;
use gradient_mesh::scene::Scene;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

const RED: Color = Color::rgba(255, 0, 0, 255);
const GREEN: Color = Color::rgba(0, 255, 0, 255);
const BLUE: Color = Color::rgba(0, 0, 255, 255);

fn create_buffer() -> Vec<u8> {
    vec![0u8; (BUFFER_WIDTH * BUFFER_HEIGHT * 4) as usize]
}

fn triangle(points: [(f32, f32); 3]) -> Triangle {
    let [(ax, ay), (bx, by), (cx, cy)] = points;
    Triangle::new(
        Vertex::new(ax, ay, RED),
        Vertex::new(bx, by, GREEN),
        Vertex::new(cx, cy, BLUE),
    )
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let scanline = ScanlineRasterizer::new();

    for (name, tri) in [
        ("small", triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])),
        ("medium", triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])),
        ("large", triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &tri, |b, tri| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_triangle(black_box(tri), &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_scene_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");

    for (columns, rows) in [(10, 5), (40, 30)] {
        let mesh = Scene::new(BUFFER_WIDTH, BUFFER_HEIGHT, columns, rows).mesh();
        group.bench_with_input(
            BenchmarkId::new("render", mesh.len()),
            &mesh,
            |b, mesh| {
                let mut renderer = FrameRenderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                b.iter(|| {
                    black_box(renderer.render(black_box(mesh.triangles())).as_bytes());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_scene_frame);
criterion_main!(benches);

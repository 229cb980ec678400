use std::cell::Cell;

use rand::SeedableRng;
use rand::rngs::StdRng;
use zenflow::export::{decode_artwork, decode_data_url, encode_png, to_data_url};
use zenflow::{
    Brush, FrameHost, FrameLoop, Gallery, GrainGrid, ImageExporter, KeyValueStore, MemoryStore,
    Renderer, SandCanvas, SandColor, ZenError,
};

struct CountingHost {
    requests: Cell<usize>,
}

impl CountingHost {
    fn new() -> Self {
        Self {
            requests: Cell::new(0),
        }
    }
}

impl FrameHost for CountingHost {
    fn request_next_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn test_empty_cells_are_transparent() {
    let mut grid = GrainGrid::new(6, 4);
    grid.set(2, 1, SandColor::new(100, 100, 100));
    let img = Renderer::default().render_to_image(&grid, &mut StdRng::seed_from_u64(1));

    assert_eq!(img.dimensions(), (6, 4));
    for (x, y, pixel) in img.enumerate_pixels() {
        if (x, y) == (2, 1) {
            assert_eq!(pixel.0[3], 255);
        } else {
            assert_eq!(pixel.0, [0, 0, 0, 0], "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_jitter_stays_in_range() {
    let base = SandColor::new(120, 60, 200);
    let mut grid = GrainGrid::new(32, 32);
    for y in 0..32 {
        for x in 0..32 {
            grid.set(x, y, base);
        }
    }

    let renderer = Renderer::new(15);
    let img = renderer.render_to_image(&grid, &mut StdRng::seed_from_u64(7));
    let mut distinct = std::collections::HashSet::new();
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        let grain = r as i16 - base.r as i16;
        assert!((-15..15).contains(&grain), "grain {} out of range", grain);
        // The same offset is applied to every channel.
        assert_eq!(g as i16 - base.g as i16, grain);
        assert_eq!(b as i16 - base.b as i16, grain);
        assert_eq!(a, 255);
        distinct.insert(grain);
    }
    assert!(distinct.len() > 10, "expected varied jitter, got {:?}", distinct);
}

#[test]
fn test_jitter_clamps_bright_colors() {
    let mut grid = GrainGrid::new(16, 16);
    for x in 0..16 {
        grid.set(x, 3, SandColor::new(255, 0, 250));
    }
    let img = Renderer::new(15).render_to_image(&grid, &mut StdRng::seed_from_u64(3));
    for x in 0..16 {
        let [r, g, b, _] = img.get_pixel(x, 3).0;
        assert!(r >= 240);
        assert!(g <= 14);
        assert!(b >= 235);
    }
}

#[test]
fn test_huge_jitter_is_capped_and_renders() {
    let renderer = Renderer::new(32000);
    assert_eq!(renderer.jitter(), 255);

    let mut grid = GrainGrid::new(8, 8);
    for x in 0..8 {
        grid.set(x, 0, SandColor::new(255, 0, 128));
    }
    let img = renderer.render_to_image(&grid, &mut StdRng::seed_from_u64(11));
    for x in 0..8 {
        assert_eq!(img.get_pixel(x, 0).0[3], 255);
    }
}

#[test]
fn test_zero_jitter_renders_base_color() {
    let mut grid = GrainGrid::new(4, 4);
    grid.set(1, 1, SandColor::new(10, 20, 30));
    let img = Renderer::new(0).render_to_image(&grid, &mut StdRng::seed_from_u64(0));
    assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 255]);
}

#[test]
fn test_render_is_reproducible_per_seed_but_changes_per_frame() {
    let mut grid = GrainGrid::new(20, 20);
    for x in 0..20 {
        grid.set(x, 10, SandColor::new(128, 128, 128));
    }
    let renderer = Renderer::default();

    let first = renderer.render_to_image(&grid, &mut StdRng::seed_from_u64(42));
    let again = renderer.render_to_image(&grid, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, again);

    let mut rng = StdRng::seed_from_u64(42);
    let frame_a = renderer.render_to_image(&grid, &mut rng);
    let frame_b = renderer.render_to_image(&grid, &mut rng);
    assert_ne!(frame_a, frame_b);
}

#[test]
fn test_frame_loop_settles_then_renders() {
    let mut canvas = SandCanvas::new(5, 5).with_brush(Brush::new(SandColor::new(90, 90, 90), 0));
    canvas.apply_stroke(2, 0);

    let host = CountingHost::new();
    let mut frame_loop = FrameLoop::with_rng(Renderer::new(0), StdRng::seed_from_u64(5));
    assert_eq!(frame_loop.frame().dimensions(), (0, 0));

    let frame = frame_loop.tick(&mut canvas, &host);
    // The grain fell before the frame was drawn.
    assert_eq!(frame.get_pixel(2, 0).0[3], 0);
    assert_eq!(frame.get_pixel(2, 1).0, [90, 90, 90, 255]);

    for _ in 0..5 {
        frame_loop.tick(&mut canvas, &host);
    }
    assert_eq!(canvas.grid.get(2, 4), Some(SandColor::new(90, 90, 90)));
    assert_eq!(frame_loop.frame().get_pixel(2, 4).0[3], 255);
    assert_eq!(frame_loop.frame_count(), 6);
    assert_eq!(host.requests.get(), 6);
}

#[test]
fn test_data_url_round_trip() {
    let mut grid = GrainGrid::new(12, 9);
    grid.set(3, 3, SandColor::new(200, 10, 10));
    let img = Renderer::new(0).render_to_image(&grid, &mut StdRng::seed_from_u64(0));

    let png = encode_png(&img).expect("png encoding");
    let url = to_data_url(&png);
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(decode_data_url(&url).expect("valid data url"), png);

    let decoded = decode_artwork(&url).expect("decodable artwork");
    assert_eq!(decoded, img);
}

#[test]
fn test_decode_rejects_foreign_urls() {
    assert!(decode_data_url("https://example.com/a.png").is_err());
    assert!(decode_data_url("data:image/png;base64,@@@").is_err());
}

#[test]
fn test_bad_payload_reports_base64_cause() {
    let err = decode_data_url("data:image/png;base64,@@@").unwrap_err();
    assert!(matches!(err, ZenError::Base64(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_save_artwork_downloads_and_persists_gallery() {
    let dir = std::env::temp_dir().join(format!("zenflow-export-{}", std::process::id()));
    let exporter = ImageExporter::new(dir.clone());

    let mut grid = GrainGrid::new(10, 10);
    grid.set(5, 5, SandColor::new(1, 2, 3));
    let frame = Renderer::default().render_to_image(&grid, &mut StdRng::seed_from_u64(9));

    let mut store = MemoryStore::new();
    let mut gallery = Gallery::new();
    let url = exporter
        .save_artwork(&frame, &mut gallery, &mut store)
        .expect("artwork saved");

    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery.get(0), Some(url.as_str()));
    assert_eq!(Gallery::load(&store), gallery);
    assert!(store.get("gallery").is_some());

    let written = std::fs::read(dir.join(zenflow::export::ARTWORK_FILE_NAME)).expect("download file");
    assert_eq!(decode_data_url(&url).expect("valid data url"), written);

    let _ = std::fs::remove_dir_all(&dir);
}

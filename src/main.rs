#[cfg(not(target_arch = "wasm32"))]
use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use zenflow::{
    Brush, FrameHost, FrameLoop, Gallery, ImageExporter, MemoryStore, Renderer, SandCanvas,
    SandColor, SandConfig, simulation,
};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config = match take_flag_value(&mut args, "--config") {
        Some(path) => SandConfig::load(Path::new(&path))?,
        None => SandConfig::default(),
    };

    if args.first().map(String::as_str) == Some("headless") {
        let frames = args.get(1).and_then(|raw| raw.parse().ok()).unwrap_or(120);
        let output = args
            .get(2)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("headless_final.png"));
        run_headless(&config, frames, &output)?;
    } else {
        run_gui_app(config)?;
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn take_flag_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let position = args.iter().position(|arg| arg == flag)?;
    args.remove(position);
    if position < args.len() {
        Some(args.remove(position))
    } else {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
struct CountingHost {
    requests: Cell<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameHost for CountingHost {
    fn request_next_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless(
    config: &SandConfig,
    frames: u64,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Running headless sand session for {} frames", frames);

    let side = config.grid_side(config.viewport_width);
    let mut canvas = SandCanvas::new(side, side)
        .with_brush(Brush::new(config.default_color(), config.default_brush_size));
    canvas.symmetry = true;

    // A diagonal sweep across the upper-left quadrant, mirrored to the right.
    let palette = [
        SandColor::new(0xc2, 0xb2, 0x80),
        SandColor::new(0x8f, 0xbc, 0xbb),
        SandColor::new(0xd0, 0x87, 0x70),
    ];
    let sweep = (side / 4) as i64;
    for step in 0..sweep {
        canvas.brush.color = palette[(step as usize / 8) % palette.len()];
        canvas.apply_stroke(step + 2, step + 2);
    }
    log::info!(
        "Painted {} grains with {} undo entries",
        canvas.grid.occupied_count(),
        canvas.history.undo_depth()
    );

    let host = CountingHost {
        requests: Cell::new(0),
    };
    let mut frame_loop = FrameLoop::new(Renderer::new(config.grain_jitter));
    for frame in 1..=frames {
        frame_loop.tick(&mut canvas, &host);
        if frame % 30 == 0 {
            log::info!(
                "Frame {}: {} grains, settled: {}",
                frame,
                canvas.grid.occupied_count(),
                simulation::is_settled(&canvas.grid)
            );
        }
    }

    let exporter = ImageExporter::new(config.export_dir.clone());
    exporter.export_png(frame_loop.frame(), output)?;

    let mut store = MemoryStore::new();
    let mut gallery = Gallery::new();
    exporter.save_artwork(frame_loop.frame(), &mut gallery, &mut store)?;

    log::info!(
        "Headless session done: {} frames requested, final frame at {}",
        host.requests.get(),
        output.display()
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn run_gui_app(config: SandConfig) -> Result<(), Box<dyn std::error::Error>> {
    let side = config.grid_side(config.viewport_width) as f32;
    let canvas_extent = side * config.cell_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_extent.max(480.0) + 40.0, canvas_extent + 200.0])
            .with_title("zenflow - Zen Sand Drawing"),
        ..Default::default()
    };

    let viewport_width = config.viewport_width;
    eframe::run_native(
        "zenflow",
        options,
        Box::new(move |cc| Box::new(zenflow::SandApp::new(cc, config, viewport_width))),
    )?;
    Ok(())
}

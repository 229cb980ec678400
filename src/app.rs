use eframe::egui;

use crate::canvas::SandCanvas;
use crate::config::SandConfig;
use crate::export::{self, ImageExporter};
use crate::gallery::Gallery;
use crate::input;
use crate::preferences::Preferences;
use crate::quotes;
use crate::render::Renderer;
use crate::scheduler::FrameLoop;
use crate::storage::MemoryStore;

const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 22, 20);
const THUMBNAIL_SIZE: f32 = 120.0;

pub struct SandApp {
    canvas: SandCanvas,
    frame_loop: FrameLoop,
    exporter: ImageExporter,
    preferences: Preferences,
    gallery: Gallery,
    // Used when the host has persistence disabled.
    fallback_store: MemoryStore,
    max_brush_size: u32,
    cell_size: f32,
    brush_rgb: [u8; 3],
    quote: &'static str,
    texture: Option<egui::TextureHandle>,
    gallery_open: bool,
    gallery_textures: Vec<Option<egui::TextureHandle>>,
    gallery_dirty: bool,
    status: Option<String>,
}

impl SandApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SandConfig, viewport_width: u32) -> Self {
        let fallback_store = MemoryStore::new();
        let (preferences, gallery) = match cc.storage {
            Some(storage) => (Preferences::load(storage, &config), Gallery::load(storage)),
            None => (
                Preferences::load(&fallback_store, &config),
                Gallery::load(&fallback_store),
            ),
        };

        let side = config.grid_side(viewport_width);
        let mut canvas = SandCanvas::new(side, side).with_brush(preferences.brush());
        canvas.symmetry = preferences.symmetry;
        log::info!(
            "Sand canvas {}x{} (brush {} r={}, symmetry {})",
            side,
            side,
            preferences.brush_color.to_hex(),
            preferences.brush_size,
            preferences.symmetry
        );

        Self {
            canvas,
            frame_loop: FrameLoop::new(Renderer::new(config.grain_jitter)),
            exporter: ImageExporter::new(config.export_dir.clone()),
            brush_rgb: preferences.brush_color.to_array(),
            preferences,
            gallery,
            fallback_store,
            max_brush_size: config.max_brush_size,
            cell_size: config.cell_size,
            quote: quotes::daily_quote(&mut rand::thread_rng()),
            texture: None,
            gallery_open: false,
            gallery_textures: Vec::new(),
            gallery_dirty: true,
            status: None,
        }
    }

    fn persist_preferences(&mut self, frame: &mut eframe::Frame) {
        self.preferences = Preferences {
            brush_color: self.canvas.brush.color,
            brush_size: self.canvas.brush.radius,
            symmetry: self.canvas.symmetry,
        };
        match frame.storage_mut() {
            Some(storage) => {
                self.preferences.save(&mut *storage);
                storage.flush();
            }
            None => self.preferences.save(&mut self.fallback_store),
        }
    }

    fn save_artwork(&mut self, frame: &mut eframe::Frame) {
        let result = match frame.storage_mut() {
            Some(storage) => {
                let result = self.exporter.save_artwork(
                    self.frame_loop.frame(),
                    &mut self.gallery,
                    &mut *storage,
                );
                storage.flush();
                result
            }
            None => self.exporter.save_artwork(
                self.frame_loop.frame(),
                &mut self.gallery,
                &mut self.fallback_store,
            ),
        };

        self.status = Some(match result {
            Ok(_) => format!("Saved {}", export::ARTWORK_FILE_NAME),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
        self.gallery_dirty = true;
    }

    fn delete_artwork(&mut self, index: usize, frame: &mut eframe::Frame) {
        let removed = match frame.storage_mut() {
            Some(storage) => {
                let removed = self.gallery.remove(index, &mut *storage);
                storage.flush();
                removed
            }
            None => self.gallery.remove(index, &mut self.fallback_store),
        };
        if removed.is_some() {
            self.gallery_dirty = true;
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        let mut preferences_changed = false;

        ui.horizontal(|ui| {
            ui.label("Color:");
            if ui.color_edit_button_srgb(&mut self.brush_rgb).changed() {
                self.canvas.brush.color = self.brush_rgb.into();
                preferences_changed = true;
            }

            let slider = egui::Slider::new(&mut self.canvas.brush.radius, 0..=self.max_brush_size)
                .text("Brush Size");
            if ui.add(slider).changed() {
                preferences_changed = true;
            }

            if ui.checkbox(&mut self.canvas.symmetry, "Symmetry").changed() {
                preferences_changed = true;
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.canvas.clear();
            }
            if ui
                .add_enabled(self.canvas.history.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.canvas.undo();
            }
            if ui
                .add_enabled(self.canvas.history.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.canvas.redo();
            }
            if ui.button("Save").clicked() {
                self.save_artwork(frame);
            }
            if ui.button(format!("Gallery ({})", self.gallery.len())).clicked() {
                self.gallery_open = true;
            }
            ui.add(egui::Slider::new(&mut self.cell_size, 1.0..=4.0).text("Zoom"));
        });

        if preferences_changed {
            self.persist_preferences(frame);
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, rect: egui::Rect, response: &egui::Response) {
        let touches = ctx.input(|i| input::touch_moves(&i.events));
        if !touches.is_empty() {
            // egui also turns the first touch into a pointer; don't paint it twice.
            for pos in touches {
                if rect.contains(pos) {
                    let (x, y) = input::to_grid(pos, rect.min, self.cell_size);
                    self.canvas.apply_stroke(x, y);
                }
            }
            return;
        }

        let (primary_down, delta) = ctx.input(|i| (i.pointer.primary_down(), i.pointer.delta()));
        if input::pointer_paints(response.hovered(), primary_down, delta) {
            if let Some(pos) = response.hover_pos() {
                let (x, y) = input::to_grid(pos, rect.min, self.cell_size);
                self.canvas.apply_stroke(x, y);
            }
        }
    }

    fn upload_frame(&mut self, ctx: &egui::Context) {
        let frame = self.frame_loop.frame();
        let size = [frame.width() as usize, frame.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("sand-canvas", image, egui::TextureOptions::NEAREST));
            }
        }
    }

    fn refresh_gallery_textures(&mut self, ctx: &egui::Context) {
        if !self.gallery_dirty {
            return;
        }
        self.gallery_textures = self
            .gallery
            .iter()
            .enumerate()
            .map(|(index, url)| match export::decode_artwork(url) {
                Ok(img) => {
                    let size = [img.width() as usize, img.height() as usize];
                    let image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                    Some(ctx.load_texture(
                        format!("artwork-{}", index),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(err) => {
                    log::warn!("Artwork {} could not be decoded: {}", index + 1, err);
                    None
                }
            })
            .collect();
        self.gallery_dirty = false;
    }

    fn gallery_window(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.gallery_open {
            return;
        }
        self.refresh_gallery_textures(ctx);

        let mut open = true;
        let mut pending_delete = None;
        egui::Window::new("Gallery")
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                if self.gallery.is_empty() {
                    ui.label("No saved artworks yet.");
                    return;
                }
                egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (index, texture) in self.gallery_textures.iter().enumerate() {
                            ui.vertical(|ui| {
                                let title = format!("Artwork {}", index + 1);
                                match texture {
                                    Some(texture) => {
                                        ui.add(egui::Image::new((
                                            texture.id(),
                                            egui::Vec2::splat(THUMBNAIL_SIZE),
                                        )))
                                        .on_hover_text(&title);
                                    }
                                    None => {
                                        ui.label(format!("{} (unreadable)", title));
                                    }
                                }
                                if ui.button("✕").clicked() {
                                    pending_delete = Some(index);
                                }
                            });
                        }
                    });
                });
            });

        if let Some(index) = pending_delete {
            self.delete_artwork(index, frame);
        }
        self.gallery_open = open;
    }
}

impl eframe::App for SandApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("zenflow - Zen Sand Drawing");
            ui.label(egui::RichText::new(self.quote).italics());

            self.toolbar(ui, frame);

            ui.separator();

            let canvas_size = egui::Vec2::new(
                self.canvas.width() as f32 * self.cell_size,
                self.canvas.height() as f32 * self.cell_size,
            );
            let (rect, response) =
                ui.allocate_exact_size(canvas_size, egui::Sense::click_and_drag());

            self.handle_input(ctx, rect, &response);

            self.frame_loop.tick(&mut self.canvas, ctx);
            self.upload_frame(ctx);

            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
            if let Some(texture) = &self.texture {
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::Pos2::ZERO, egui::Pos2::new(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            ui.label(format!(
                "Frame: {} | Grains: {} | Undo: {} | Redo: {}",
                self.frame_loop.frame_count(),
                self.canvas.grid.occupied_count(),
                self.canvas.history.undo_depth(),
                self.canvas.history.redo_depth()
            ));
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });

        self.gallery_window(ctx, frame);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.preferences.save(storage);
        self.gallery.save(storage);
    }
}

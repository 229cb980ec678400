//! Zen sand drawing: a grid of colored grains that settles under gravity

pub mod app;
pub mod brush;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod gallery;
pub mod grid;
pub mod history;
pub mod input;
pub mod preferences;
pub mod quotes;
pub mod render;
pub mod scheduler;
pub mod simulation;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::SandApp;
pub use brush::Brush;
pub use canvas::SandCanvas;
pub use color::SandColor;
pub use config::SandConfig;
pub use error::ZenError;
pub use export::ImageExporter;
pub use gallery::Gallery;
pub use grid::{GrainGrid, Snapshot};
pub use history::History;
pub use preferences::Preferences;
pub use render::Renderer;
pub use scheduler::{FrameHost, FrameLoop};
pub use storage::{KeyValueStore, MemoryStore};

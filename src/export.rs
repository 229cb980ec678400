use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::error::{Result, ZenError};
use crate::gallery::Gallery;
use crate::storage::KeyValueStore;

pub const ARTWORK_FILE_NAME: &str = "zenflow-artwork.png";
const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn to_data_url(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(png))
}

pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let payload = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or(ZenError::NotPngDataUrl)?;
    Ok(STANDARD.decode(payload)?)
}

/// Decodes a gallery entry back into pixels.
pub fn decode_artwork(url: &str) -> Result<RgbaImage> {
    let png = decode_data_url(url)?;
    let img = image::load_from_memory_with_format(&png, ImageFormat::Png)?;
    Ok(img.to_rgba8())
}

/// Turns rendered frames into downloads and gallery entries.
pub struct ImageExporter {
    output_dir: PathBuf,
}

impl ImageExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn export_png(&self, img: &RgbaImage, path: &Path) -> Result<()> {
        img.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Saves the frame as a download, appends it to the gallery and persists
    /// the gallery right away. Returns the stored data URL.
    pub fn save_artwork<S: KeyValueStore + ?Sized>(
        &self,
        frame: &RgbaImage,
        gallery: &mut Gallery,
        store: &mut S,
    ) -> Result<String> {
        let png = encode_png(frame)?;
        let data_url = to_data_url(&png);
        self.deliver_download(&png, &data_url)?;
        gallery.push(data_url.clone());
        gallery.save(store);
        log::info!(
            "Saved artwork {} ({} bytes), gallery now holds {}",
            ARTWORK_FILE_NAME,
            png.len(),
            gallery.len()
        );
        Ok(data_url)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver_download(&self, png: &[u8], _data_url: &str) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::write(self.output_dir.join(ARTWORK_FILE_NAME), png)?;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver_download(&self, _png: &[u8], data_url: &str) -> Result<()> {
        crate::web::trigger_download(ARTWORK_FILE_NAME, data_url)
    }
}

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::{Result, ZenError};
use crate::{SandApp, SandConfig};

/// Mounts the app on the canvas element with id `canvas_id`.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = SandConfig::default();
    let viewport_width = viewport_width().unwrap_or(config.viewport_width);

    eframe::WebRunner::new()
        .start(
            &canvas_id,
            eframe::WebOptions::default(),
            Box::new(move |cc| Box::new(SandApp::new(cc, config, viewport_width))),
        )
        .await
}

fn viewport_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Clicks a temporary `<a download>` pointing at `data_url`.
pub fn trigger_download(file_name: &str, data_url: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ZenError::Download("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(|err| ZenError::Download(format!("{:?}", err)))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ZenError::Download("not an anchor element".to_owned()))?;
    anchor.set_download(file_name);
    anchor.set_href(data_url);
    anchor.click();
    Ok(())
}

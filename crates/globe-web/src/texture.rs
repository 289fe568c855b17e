//! Remote image fetching for the globe map and star sprite.

use crate::constants::MAX_TEXTURE_DIM;
use crate::dom::js_err;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let mut img = image::load_from_memory(bytes)?;
        if img.width() > MAX_TEXTURE_DIM || img.height() > MAX_TEXTURE_DIM {
            img = img.resize(
                MAX_TEXTURE_DIM,
                MAX_TEXTURE_DIM,
                image::imageops::FilterType::Triangle,
            );
        }
        let rgba = img.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }

    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }
}

/// Filled by a background fetch, drained by the frame loop.
pub type PendingImage = Rc<RefCell<Option<DecodedImage>>>;

pub async fn fetch_image(url: &str) -> anyhow::Result<DecodedImage> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(js_err)?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let buffer = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    DecodedImage::from_bytes(&bytes)
}

pub fn spawn_fetch(url: &'static str) -> PendingImage {
    let slot: PendingImage = Rc::new(RefCell::new(None));
    let slot_fetch = slot.clone();
    spawn_local(async move {
        match fetch_image(url).await {
            Ok(img) => {
                log::info!("[texture] loaded {} ({}x{})", url, img.width, img.height);
                *slot_fetch.borrow_mut() = Some(img);
            }
            Err(e) => log::warn!("[texture] {} unavailable, keeping placeholder: {:?}", url, e),
        }
    });
    slot
}

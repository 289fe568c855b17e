#![cfg(target_arch = "wasm32")]
use globe_core::stars::generate_stars;
use globe_core::{
    bundled_countries, AppState, NumberFormat, SceneParams, GLOBE_TEXTURE_URL, STAR_SPREAD,
    STAR_TEXTURE_URL,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod popup;
mod render;
mod texture;

use constants::{CANVAS_SELECTOR, CONTAINER_SELECTOR, DEFAULT_LOCALE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::HtmlElement = dom::query(&document, CONTAINER_SELECTOR)?;
    let canvas: web::HtmlCanvasElement = dom::query(&document, CANVAS_SELECTOR)?;
    let popup = popup::PopupElements::find(&document)?;
    dom::sync_canvas_to_container(&canvas, &container);

    let locale = window
        .navigator()
        .language()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let format = NumberFormat::for_locale(&locale);

    let records = bundled_countries()?;
    let params = SceneParams::default();
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let (w, h) = dom::container_size(&container);
    let state = AppState::from_records(params, &records, &format, seed, w / h);
    log::info!(
        "[init] {} markers from {} records ({})",
        state.markers.len(),
        records.len(),
        locale
    );
    let star_count = state.params.star_count;
    let marker_count = state.markers.len();
    let state = Rc::new(RefCell::new(state));

    dom::wire_resize(canvas.clone(), container.clone(), state.clone());
    events::wire_input_handlers(&events::InputWiring {
        container: container.clone(),
        canvas: canvas.clone(),
        state: state.clone(),
    });

    let pending_globe = texture::spawn_fetch(GLOBE_TEXTURE_URL);
    let pending_star = texture::spawn_fetch(STAR_TEXTURE_URL);

    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let stars = generate_stars(star_count, STAR_SPREAD, &mut rng);
    let gpu = frame::init_gpu(&canvas, &stars, marker_count).await;

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        gpu,
        canvas,
        popup,
        pending_globe,
        pending_star,
        started: Instant::now(),
    }));
    frame::start_loop(ctx);
    Ok(())
}

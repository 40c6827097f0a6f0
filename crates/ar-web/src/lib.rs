#![cfg(target_arch = "wasm32")]
use ar_core::{AppState, ExperienceConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod assets;
mod dom;
mod events;
mod frame;
mod input;
mod mindar;
mod panel;
mod scene;
mod three;

use app::App;
use scene::SceneBridge;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ar-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Read the experience configuration, honouring a `data-slides` override on
/// the container.
fn load_config(container: &web::HtmlElement) -> ExperienceConfig {
    let config = ExperienceConfig::default();
    match container.dataset().get("slides") {
        Some(list) => config.with_slide_list(&list),
        None => config,
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = document
        .get_element_by_id("container")
        .ok_or_else(|| anyhow::anyhow!("missing #container"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let config = load_config(&container);
    let state = AppState::new(&config)?;

    let mindar = mindar::MindARThree::new(&mindar::session_options(&container, &config))
        .map_err(|e| anyhow::anyhow!("MindAR init failed: {:?}", e))?;
    let anchor = mindar.add_anchor(0);

    let bridge = SceneBridge::new(
        document.clone(),
        mindar.renderer(),
        mindar.scene(),
        mindar.camera(),
        anchor.group(),
        config.panel.clone(),
    );
    bridge.setup_lighting();
    let app = App::new(state, bridge);

    // initial banners: loading until the session reports in
    dom::show_banners(&document, app.state.borrow().banners());

    assets::load_textures(&app, &config.slide_urls, &config.callout_texture_url);
    assets::load_model(&app, &config.model_url);

    events::wire_target_callbacks(&app, &anchor);
    events::wire_pointer_handlers(&app, &container);
    events::wire_panel_buttons(&app, &document);
    events::start_session(&app, &mindar);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(app))));
    Ok(())
}

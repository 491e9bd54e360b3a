#![cfg(target_arch = "wasm32")]
use crate::core::intro::IntroSettings;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod map;
mod render;
mod starfield;

pub use starfield::StarfieldHandle;

thread_local! {
    // The page-load starfield, kept so JS can stop it later.
    static SKY: RefCell<Option<StarfieldHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sky-map-web starting");

    start_starfield();
    init_map_if_present();
    Ok(())
}

/// Start the `#sky` starfield unless it is already running. Returns whether
/// a starfield is running afterwards.
#[wasm_bindgen]
pub fn start_starfield() -> bool {
    SKY.with(|sky| {
        let mut sky = sky.borrow_mut();
        if sky.as_ref().is_some_and(|h| h.running()) {
            log::warn!("[sky] already running; ignoring start");
            return true;
        }
        match starfield::start() {
            Ok(handle) => {
                *sky = Some(handle);
                true
            }
            Err(e) => {
                log::info!("[sky] disabled: {}", e);
                false
            }
        }
    })
}

/// Stop the page starfield's frame loop and listeners.
#[wasm_bindgen]
pub fn stop_starfield() {
    SKY.with(|sky| {
        if let Some(mut handle) = sky.borrow_mut().take() {
            handle.stop();
            log::info!("[sky] stopped");
        }
    });
}

#[wasm_bindgen]
pub fn init_map_if_present() {
    if let Err(e) = boot_map() {
        log::warn!("map init error: {:?}", e);
    }
}

fn boot_map() -> anyhow::Result<()> {
    use anyhow::Context;
    let created = map::init_if_present(IntroSettings::default()).context("map bootstrap")?;
    if !created {
        log::info!("[map] no #map container; skipping");
    }
    Ok(())
}

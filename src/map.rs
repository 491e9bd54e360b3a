//! MapLibre bootstrap.
//!
//! The page loads MapLibre GL JS as the global `maplibregl`; this module
//! binds the handful of calls we need and drives the intro on `load`.

use crate::core::intro::{
    badge_text, ease_out_cubic, CameraView, EaseTo, IntroSettings, LngLat, MapSurface,
    MAP_CONTAINER_ID, TIME_BADGE_SELECTOR, TIME_LOCALE, TIME_ZONE, ZONE_LABEL,
};
use crate::dom;
use crate::error::SetupError;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = maplibregl, js_name = Map)]
    #[derive(Clone, Debug)]
    type MapLibreMap;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Map", catch)]
    fn new(options: &JsValue) -> Result<MapLibreMap, JsValue>;

    #[wasm_bindgen(method, getter, js_class = "Map", js_name = scrollZoom)]
    fn scroll_zoom(this: &MapLibreMap) -> Handler;
    #[wasm_bindgen(method, getter, js_class = "Map", js_name = boxZoom)]
    fn box_zoom(this: &MapLibreMap) -> Handler;
    #[wasm_bindgen(method, getter, js_class = "Map", js_name = dragPan)]
    fn drag_pan(this: &MapLibreMap) -> Handler;
    #[wasm_bindgen(method, getter, js_class = "Map")]
    fn keyboard(this: &MapLibreMap) -> Handler;
    #[wasm_bindgen(method, getter, js_class = "Map", js_name = doubleClickZoom)]
    fn double_click_zoom(this: &MapLibreMap) -> Handler;

    #[wasm_bindgen(method, js_class = "Map")]
    fn on(this: &MapLibreMap, event: &str, listener: &js_sys::Function);
    #[wasm_bindgen(method, js_class = "Map", js_name = jumpTo)]
    fn jump_to(this: &MapLibreMap, options: &JsValue);
    #[wasm_bindgen(method, js_class = "Map", js_name = easeTo)]
    fn ease_to(this: &MapLibreMap, options: &JsValue);

    /// Any of the map's interaction handlers (`scrollZoom`, `dragPan`, ...).
    type Handler;
    #[wasm_bindgen(method)]
    fn enable(this: &Handler);

    #[wasm_bindgen(js_namespace = maplibregl, js_name = Marker)]
    #[derive(Clone, Debug)]
    type Marker;
    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Marker")]
    fn new(options: &JsValue) -> Marker;
    #[wasm_bindgen(method, js_class = "Marker", js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;
    #[wasm_bindgen(method, js_class = "Marker", js_name = addTo)]
    fn add_to(this: &Marker, map: &MapLibreMap) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    style: &'a str,
    center: LngLat,
    zoom: f64,
    attribution_control: bool,
    interactive: bool,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    color: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClockFormat<'a> {
    hour: &'a str,
    minute: &'a str,
    hour12: bool,
    time_zone: &'a str,
}

/// `MapSurface` over a live MapLibre instance.
struct LiveMap {
    map: MapLibreMap,
}

fn encoded(what: &str, value: Result<JsValue, serde_wasm_bindgen::Error>) -> Option<JsValue> {
    match value {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[map] could not encode {} options: {}", what, e);
            None
        }
    }
}

impl MapSurface for LiveMap {
    fn jump_to(&mut self, view: CameraView) {
        if let Some(opts) = encoded("jumpTo", serde_wasm_bindgen::to_value(&view)) {
            self.map.jump_to(&opts);
        }
    }

    fn ease_to(&mut self, ease: EaseTo) {
        let Some(opts) = encoded("easeTo", serde_wasm_bindgen::to_value(&ease)) else {
            return;
        };
        // Functions don't serialize; attach the curve by hand. The widget
        // may call it after this frame, so it lives as long as the page.
        let easing = Closure::wrap(Box::new(ease_out_cubic) as Box<dyn Fn(f64) -> f64>);
        if let Err(e) = js_sys::Reflect::set(&opts, &"easing".into(), easing.as_ref()) {
            log::warn!("[map] easing not attached: {:?}", e);
        }
        easing.forget();
        self.map.ease_to(&opts);
    }

    fn add_marker(&mut self, at: LngLat, color: &str) {
        let (Some(opts), Some(lng_lat)) = (
            encoded("Marker", serde_wasm_bindgen::to_value(&MarkerOptions { color })),
            encoded("LngLat", serde_wasm_bindgen::to_value(&at)),
        ) else {
            return;
        };
        Marker::new(&opts).set_lng_lat(&lng_lat).add_to(&self.map);
    }
}

fn build_map(container: &web::Element, settings: &IntroSettings) -> Result<MapLibreMap, SetupError> {
    let opts = serde_wasm_bindgen::to_value(&MapOptions {
        style: settings.style_url,
        center: settings.center,
        zoom: settings.initial_zoom,
        attribution_control: false,
        interactive: true,
    })?;
    js_sys::Reflect::set(&opts, &"container".into(), container)?;
    let map = MapLibreMap::new(&opts)?;

    map.scroll_zoom().enable();
    map.box_zoom().enable();
    map.drag_pan().enable();
    map.keyboard().enable();
    map.double_click_zoom().enable();
    Ok(map)
}

/// Current Sofia wall-clock time as `HH:mm`.
fn sofia_clock() -> Option<String> {
    let locales = js_sys::Array::of1(&TIME_LOCALE.into());
    let options = serde_wasm_bindgen::to_value(&ClockFormat {
        hour: "2-digit",
        minute: "2-digit",
        hour12: false,
        time_zone: TIME_ZONE,
    })
    .ok()?;
    let formatter = js_sys::Intl::DateTimeFormat::new(&locales, options.unchecked_ref());
    formatter
        .format()
        .call1(&JsValue::UNDEFINED, &js_sys::Date::new_0())
        .ok()?
        .as_string()
}

fn write_time_badge(document: &web::Document) {
    let Ok(Some(badge)) = document.query_selector(TIME_BADGE_SELECTOR) else {
        return;
    };
    if let Some(hh_mm) = sofia_clock() {
        badge.set_text_content(Some(&badge_text(&hh_mm, ZONE_LABEL)));
    }
}

/// Build the map if `#map` exists and queue the intro for its `load` event.
/// Returns `Ok(false)` when the page has no map container.
pub fn init_if_present(settings: IntroSettings) -> Result<bool, SetupError> {
    let document = dom::window_document()?;
    let Some(container) = document.get_element_by_id(MAP_CONTAINER_ID) else {
        return Ok(false);
    };
    let map = build_map(&container, &settings)?;
    log::info!(
        "[map] created at ({}, {}) zoom {}",
        settings.center.0,
        settings.center.1,
        settings.initial_zoom
    );

    let mut surface = LiveMap { map: map.clone() };
    let on_load: Closure<dyn FnMut()> = Closure::once(move || {
        settings.play(&mut surface);
        write_time_badge(&document);
        log::info!("[map] intro started");
    });
    map.on("load", on_load.as_ref().unchecked_ref());
    on_load.forget();
    Ok(true)
}

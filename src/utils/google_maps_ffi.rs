// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para la API JS de Google Maps - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    /// `google.maps.Map`
    #[wasm_bindgen(js_name = Map)]
    #[derive(Debug, Clone)]
    pub type GoogleMap;

    #[wasm_bindgen(catch, constructor, js_class = "Map")]
    pub fn new(container: &HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    /// Handle devuelto por `addListener`
    #[derive(Debug, Clone)]
    pub type MapsEventListener;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapsEventListener);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
extern "C" {
    /// `google.maps.places.Autocomplete`
    #[derive(Debug, Clone)]
    pub type Autocomplete;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(input: &HtmlInputElement, options: &JsValue) -> Result<Autocomplete, JsValue>;

    /// Lugar seleccionado; sin `geometry` si el usuario no eligió una sugerencia
    #[wasm_bindgen(method, js_name = getPlace)]
    pub fn get_place(this: &Autocomplete) -> JsValue;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(
        this: &Autocomplete,
        event_name: &str,
        handler: &js_sys::Function,
    ) -> MapsEventListener;
}

/// Helper: `window.google.maps` ya existe (script cargado por otra vía)
pub fn is_maps_api_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    js_sys::Reflect::get(&window, &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .map(|maps| maps.is_object())
        .unwrap_or(false)
}

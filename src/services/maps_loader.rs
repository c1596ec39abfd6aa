// ============================================================================
// MAPS LOADER - Carga única del script de Google Maps (+ Places)
// ============================================================================
// Todas las llamadas esperan la misma Promise: el <script> se inyecta una vez.
// Sin reintentos: si falla, la página queda en estado degradado.
// ============================================================================

use std::cell::RefCell;

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

use crate::maps::MapError;
use crate::utils::google_maps_ffi::is_maps_api_present;

const MAPS_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";
const MAPS_SCRIPT_ID: &str = "google-maps-script";
const MAPS_LIBRARIES: &str = "places";

thread_local! {
    static SCRIPT_LOAD: RefCell<Option<Promise>> = RefCell::new(None);
}

/// URL del script; `encoded_key` ya debe venir codificada para query string
pub fn script_url(encoded_key: &str) -> String {
    format!(
        "{}?key={}&libraries={}",
        MAPS_SCRIPT_BASE, encoded_key, MAPS_LIBRARIES
    )
}

fn inject_script(api_key: &str) -> Result<Promise, MapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapError::Js("document not available".to_string()))?;
    let head = document
        .head()
        .ok_or_else(|| MapError::Js("<head> not available".to_string()))?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(MapError::from)?
        .dyn_into()
        .map_err(|_| MapError::Js("could not create <script>".to_string()))?;

    let encoded_key: String = js_sys::encode_uri_component(api_key).into();
    script.set_id(MAPS_SCRIPT_ID);
    script.set_src(&script_url(&encoded_key));
    script.set_async(true);

    let promise = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script).map_err(MapError::from)?;
    log::info!("🗺️ Inyectando script de Google Maps");

    Ok(promise)
}

/// Carga el script de Google Maps una sola vez por página
pub async fn load_maps_script(api_key: Option<&str>) -> Result<(), MapError> {
    let api_key = api_key.ok_or(MapError::MissingApiKey)?;

    if is_maps_api_present() {
        return Ok(());
    }

    let promise = SCRIPT_LOAD.with(|slot| -> Result<Promise, MapError> {
        let mut slot = slot.borrow_mut();
        if let Some(promise) = slot.as_ref() {
            return Ok(promise.clone());
        }
        let promise = inject_script(api_key)?;
        *slot = Some(promise.clone());
        Ok(promise)
    })?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| MapError::ScriptLoad("network or CSP error".to_string()))?;

    if is_maps_api_present() {
        Ok(())
    } else {
        Err(MapError::ScriptLoad("google.maps not defined after load".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_url_requests_places_library() {
        let url = script_url("AIzaTest_key-1");
        assert!(url.starts_with("https://maps.googleapis.com/maps/api/js?"));
        assert!(url.contains("key=AIzaTest_key-1"));
        assert!(url.contains("libraries=places"));
    }

    #[test]
    fn missing_key_fails_without_touching_the_dom() {
        let result = futures::executor::block_on(load_maps_script(None));
        assert_eq!(result, Err(MapError::MissingApiKey));
    }
}

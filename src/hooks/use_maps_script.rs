// ============================================================================
// MAPS SCRIPT - Estado de carga de Google Maps compartido por contexto
// ============================================================================
// Un solo MapsProvider por vista: el mapa y los dos PlaceSearch leen el mismo
// `MapLoadState` en lugar de cargar el script cada uno.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::{MapError, MapLoadState};
use crate::services::load_maps_script;

const AUTH_FAILURE_HOOK: &str = "gm_authFailure";

#[derive(Properties, PartialEq)]
pub struct MapsProviderProps {
    pub children: Children,
}

#[function_component(MapsProvider)]
pub fn maps_provider(props: &MapsProviderProps) -> Html {
    let state = use_state(|| match CONFIG.maps_api_key() {
        Some(_) => MapLoadState::Loading,
        None => MapLoadState::Failed(MapError::MissingApiKey),
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let auth_failed = Rc::new(Cell::new(false));
            let mut auth_listener = None;

            if let Some(api_key) = CONFIG.maps_api_key() {
                auth_listener = register_auth_failure(state.clone(), auth_failed.clone());

                let state = state.clone();
                let api_key = api_key.to_string();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = load_maps_script(Some(&api_key)).await;
                    match &result {
                        Ok(()) => log::info!("✅ Google Maps cargado"),
                        Err(e) => log::error!("❌ Google Maps no disponible: {}", e),
                    }
                    // gm_authFailure puede haber llegado antes que onload
                    if !auth_failed.get() {
                        state.set(MapLoadState::from(result));
                    }
                });
            } else {
                log::warn!("⚠️ GOOGLE_MAPS_API_KEY no configurada, mapa deshabilitado");
            }

            move || {
                if let Some(listener) = auth_listener {
                    if let Some(window) = web_sys::window() {
                        let _ = js_sys::Reflect::delete_property(
                            &window,
                            &JsValue::from_str(AUTH_FAILURE_HOOK),
                        );
                    }
                    drop(listener);
                }
            }
        });
    }

    html! {
        <ContextProvider<MapLoadState> context={(*state).clone()}>
            {props.children.clone()}
        </ContextProvider<MapLoadState>>
    }
}

/// Google llama a `window.gm_authFailure` cuando rechaza la clave
fn register_auth_failure(
    state: UseStateHandle<MapLoadState>,
    auth_failed: Rc<Cell<bool>>,
) -> Option<Closure<dyn FnMut()>> {
    let window = web_sys::window()?;
    let closure = Closure::wrap(Box::new(move || {
        log::error!("❌ Google Maps rechazó la API key");
        auth_failed.set(true);
        state.set(MapLoadState::Failed(MapError::AuthFailure));
    }) as Box<dyn FnMut()>);

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(AUTH_FAILURE_HOOK),
        closure.as_ref(),
    )
    .ok()?;

    Some(closure)
}

/// Estado de carga del script; sin MapsProvider el mapa queda deshabilitado
#[hook]
pub fn use_maps_state() -> MapLoadState {
    use_context::<MapLoadState>()
        .unwrap_or_else(|| MapLoadState::Failed(MapError::Js("MapsProvider not mounted".to_string())))
}

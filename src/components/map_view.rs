use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_maps_state;
use crate::maps::{MapError, MapLoadState, MapOptions};
use crate::models::Place;
use crate::utils::google_maps_ffi::GoogleMap;
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    // TODO: dibujar marcadores de origen/destino una vez definido cómo se pintan
    #[prop_or_default]
    pub origin: Option<Place>,
    #[prop_or_default]
    pub destination: Option<Place>,
}

fn create_map(container_ref: &NodeRef) -> Result<GoogleMap, MapError> {
    let container = container_ref.cast::<HtmlElement>().ok_or(MapError::NoContainer)?;
    let options = MapOptions::from_config(&CONFIG.map_config);
    let js_options = serde_wasm_bindgen::to_value(&options).map_err(|e| MapError::Js(e.to_string()))?;
    let map = GoogleMap::new(&container, &js_options)?;

    log::info!(
        "🗺️ Mapa creado en ({}, {}) zoom {}",
        options.center.lat,
        options.center.lng,
        options.zoom
    );
    Ok(map)
}

/// Mapa centrado en la posición fija de la configuración
#[function_component(MapView)]
pub fn map_view(_props: &MapViewProps) -> Html {
    let lang = CONFIG.language;
    let maps_state = use_maps_state();
    let container_ref = use_node_ref();
    let map = use_mut_ref(|| None::<GoogleMap>);
    let create_error = use_state(|| None::<MapError>);

    {
        let container_ref = container_ref.clone();
        let create_error = create_error.clone();

        use_effect_with(maps_state.is_ready(), move |ready| {
            if *ready && map.borrow().is_none() {
                match create_map(&container_ref) {
                    Ok(created) => *map.borrow_mut() = Some(created),
                    Err(e) => {
                        log::error!("❌ Error creando el mapa: {}", e);
                        create_error.set(Some(e));
                    }
                }
            }
            || ()
        });
    }

    let style = format!("height: {}px;", CONFIG.map_config.height_px);

    let failure = match (&maps_state, &*create_error) {
        (MapLoadState::Failed(e), _) | (_, Some(e)) => Some(e.clone()),
        _ => None,
    };

    match failure {
        Some(error) => html! {
            <div class="map-unavailable" {style} role="alert">
                <div>
                    <strong>{t("mapa_indisponivel", lang)}</strong>
                    <p><small>{error.to_string()}</small></p>
                </div>
            </div>
        },
        None => html! {
            <div class="map-canvas" ref={container_ref} {style}>
                if maps_state == MapLoadState::Loading {
                    <div class="map-placeholder" style="height: 100%;">
                        {t("carregando_mapa", lang)}
                    </div>
                }
            </div>
        },
    }
}

// ============================================================================
// PLACE SEARCH - Input de origen/destino
// ============================================================================
// Autocomplete: emite solo al elegir una sugerencia con geometría.
// Texto plano: emite en cada tecla el valor completo del input.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{PlaceSearchMode, CONFIG};
use crate::hooks::use_maps_state;
use crate::maps::{AutocompleteOptions, MapLoadState};
use crate::models::Place;
use crate::services::{place_from_text, resolve_selection, GooglePlaceResult};
use crate::utils::google_maps_ffi::{Autocomplete, MapsEventListener};
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct PlaceSearchProps {
    pub on_place_selected: Callback<Place>,
    /// Por defecto `CONFIG.place_search_mode`
    #[prop_or_default]
    pub mode: Option<PlaceSearchMode>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Listener de `place_changed`; se quita al desmontar
struct AutocompleteBinding {
    listener: MapsEventListener,
    _handler: Closure<dyn FnMut()>,
}

impl AutocompleteBinding {
    fn detach(self) {
        self.listener.remove();
    }
}

fn attach_autocomplete(
    input_ref: &NodeRef,
    on_place_selected: Callback<Place>,
) -> Option<AutocompleteBinding> {
    let input = input_ref.cast::<HtmlInputElement>()?;
    let options = serde_wasm_bindgen::to_value(&AutocompleteOptions::default()).ok()?;

    let autocomplete = match Autocomplete::new(&input, &options) {
        Ok(autocomplete) => autocomplete,
        Err(e) => {
            log::error!("❌ No se pudo crear el Autocomplete: {:?}", e);
            return None;
        }
    };

    let handler = {
        let autocomplete = autocomplete.clone();
        Closure::wrap(Box::new(move || {
            let selected = GooglePlaceResult::new(autocomplete.get_place());
            match resolve_selection(&selected) {
                Some(place) => on_place_selected.emit(place),
                None => log::info!("ℹ️ Lugar sin geometría, no se emite"),
            }
        }) as Box<dyn FnMut()>)
    };

    let listener = autocomplete.add_listener("place_changed", handler.as_ref().unchecked_ref());

    Some(AutocompleteBinding {
        listener,
        _handler: handler,
    })
}

/// Autocompletado sin script: el input nunca emitirá, se avisa al usuario
fn suggestions_unavailable(mode: PlaceSearchMode, state: &MapLoadState) -> bool {
    mode == PlaceSearchMode::Autocomplete && matches!(state, MapLoadState::Failed(_))
}

#[function_component(PlaceSearch)]
pub fn place_search(props: &PlaceSearchProps) -> Html {
    let mode = props.mode.unwrap_or(CONFIG.place_search_mode);
    let maps_state = use_maps_state();
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        let on_place_selected = props.on_place_selected.clone();
        let autocomplete_ready = mode == PlaceSearchMode::Autocomplete && maps_state.is_ready();

        use_effect_with(autocomplete_ready, move |ready| {
            let binding = if *ready {
                attach_autocomplete(&input_ref, on_place_selected)
            } else {
                None
            };

            move || {
                if let Some(binding) = binding {
                    binding.detach();
                }
            }
        });
    }

    let unavailable = suggestions_unavailable(mode, &maps_state);

    let oninput = match mode {
        PlaceSearchMode::PlainText => {
            let on_place_selected = props.on_place_selected.clone();
            Some(Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_place_selected.emit(place_from_text(&input.value()));
            }))
        }
        PlaceSearchMode::Autocomplete => None,
    };

    html! {
        <>
            <input
                type="text"
                id={props.id.clone()}
                class="form-input place-search"
                placeholder={t("digite_local", CONFIG.language)}
                autocomplete="off"
                ref={input_ref}
                {oninput}
            />
            if unavailable {
                <p class="search-unavailable" role="status">
                    {t("busca_indisponivel", CONFIG.language)}
                </p>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::MapError;

    #[test]
    fn failed_script_flags_autocomplete_inputs() {
        let failed = MapLoadState::Failed(MapError::MissingApiKey);
        assert!(suggestions_unavailable(PlaceSearchMode::Autocomplete, &failed));
        assert!(!suggestions_unavailable(PlaceSearchMode::PlainText, &failed));
    }

    #[test]
    fn loading_or_ready_script_shows_no_hint() {
        assert!(!suggestions_unavailable(PlaceSearchMode::Autocomplete, &MapLoadState::Loading));
        assert!(!suggestions_unavailable(PlaceSearchMode::Autocomplete, &MapLoadState::Ready));
    }
}

// ============================================================================
// MAPS - Tipos comunes del mapa (opciones, estado de carga, errores)
// ============================================================================

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::MapConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Opciones que se pasan a `new google.maps.Map(...)`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub street_view_control: bool,
    pub map_type_control: bool,
}

impl MapOptions {
    /// Centro y zoom fijos de la configuración
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: LatLng {
                lat: config.default_center_lat,
                lng: config.default_center_lng,
            },
            zoom: config.default_zoom,
            street_view_control: false,
            map_type_control: false,
        }
    }
}

/// Campos pedidos a Places: solo lo necesario para construir un `Place`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteOptions {
    pub fields: Vec<&'static str>,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            fields: vec!["formatted_address", "geometry", "name"],
        }
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// `GOOGLE_MAPS_API_KEY` no configurada
    MissingApiKey,
    /// Google rechazó la clave (`gm_authFailure`)
    AuthFailure,
    ScriptLoad(String),
    NoContainer,
    Js(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::MissingApiKey => write!(f, "Google Maps API key is not configured"),
            MapError::AuthFailure => write!(f, "Google Maps rejected the API key"),
            MapError::ScriptLoad(msg) => write!(f, "Google Maps script failed to load: {}", msg),
            MapError::NoContainer => write!(f, "Map container is not mounted"),
            MapError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        MapError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Estado de carga del script de Google Maps
#[derive(Debug, Clone, PartialEq)]
pub enum MapLoadState {
    Loading,
    Ready,
    Failed(MapError),
}

impl MapLoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapLoadState::Ready)
    }
}

impl From<Result<(), MapError>> for MapLoadState {
    fn from(result: Result<(), MapError>) -> Self {
        match result {
            Ok(()) => MapLoadState::Ready,
            Err(e) => MapLoadState::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_use_configured_center_and_zoom() {
        let options = MapOptions::from_config(&MapConfig::default());
        assert_eq!(options.center, LatLng { lat: -23.550520, lng: -46.633308 });
        assert_eq!(options.zoom, 13.0);
    }

    #[test]
    fn options_serialize_in_google_shape() {
        let json = serde_json::to_value(MapOptions::from_config(&MapConfig::default())).unwrap();
        assert_eq!(json["center"]["lat"], -23.550520);
        assert_eq!(json["zoom"], 13.0);
        assert_eq!(json["streetViewControl"], false);
    }

    #[test]
    fn autocomplete_requests_address_and_geometry() {
        let json = serde_json::to_value(AutocompleteOptions::default()).unwrap();
        let fields: Vec<_> = json["fields"].as_array().unwrap().iter().filter_map(|f| f.as_str()).collect();
        assert!(fields.contains(&"formatted_address"));
        assert!(fields.contains(&"geometry"));
    }

    #[test]
    fn load_result_maps_to_state() {
        assert_eq!(MapLoadState::from(Ok(())), MapLoadState::Ready);
        assert_eq!(
            MapLoadState::from(Err(MapError::MissingApiKey)),
            MapLoadState::Failed(MapError::MissingApiKey)
        );
        assert!(!MapLoadState::Loading.is_ready());
    }
}

use serde::{Deserialize, Serialize};

use crate::utils::i18n::Language;

/// Estrategia para convertir el texto del usuario en un `Place`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceSearchMode {
    /// Widget de autocompletado de Google Places (devuelve dirección + coordenadas)
    Autocomplete,
    /// Eco del texto tecleado, sin coordenadas
    PlainText,
}

impl PlaceSearchMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "autocomplete" | "google" => Some(PlaceSearchMode::Autocomplete),
            "text" | "plain" | "plaintext" => Some(PlaceSearchMode::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub google_maps_api_key: String,
    pub map_config: MapConfig,
    pub place_search_mode: PlaceSearchMode,
    pub session_storage_key: String,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            google_maps_api_key: String::new(),
            map_config: MapConfig::default(),
            place_search_mode: PlaceSearchMode::Autocomplete,
            session_storage_key: "motorista".to_string(),
            language: Language::Portuguese,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub height_px: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // São Paulo
            default_center_lat: -23.550520,
            default_center_lng: -46.633308,
            default_zoom: 13.0,
            height_px: 400,
        }
    }
}

/// Parsea un valor opcional; si falta o no es válido usa `default`
fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        let map_defaults = MapConfig::default();

        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), true),
            google_maps_api_key: option_env!("GOOGLE_MAPS_API_KEY")
                .unwrap_or("")
                .trim()
                .to_string(),
            map_config: MapConfig {
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    map_defaults.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    map_defaults.default_center_lng,
                ),
                default_zoom: parse_or(option_env!("DEFAULT_MAP_ZOOM"), map_defaults.default_zoom),
                height_px: parse_or(option_env!("MAP_HEIGHT_PX"), map_defaults.height_px),
            },
            place_search_mode: option_env!("PLACE_SEARCH_MODE")
                .and_then(PlaceSearchMode::parse)
                .unwrap_or(defaults.place_search_mode),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .unwrap_or("motorista")
                .to_string(),
            language: option_env!("APP_LANGUAGE")
                .map(Language::from_code)
                .unwrap_or(defaults.language),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Clave de la API de Google Maps, `None` si no está configurada
    pub fn maps_api_key(&self) -> Option<&str> {
        if self.google_maps_api_key.is_empty() {
            None
        } else {
            Some(&self.google_maps_api_key)
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("17"), 13.0), 17.0);
        assert_eq!(parse_or(Some(" 15 "), 13.0), 15.0);
        assert_eq!(parse_or(Some("not-a-number"), 13.0), 13.0);
        assert_eq!(parse_or::<u32>(None, 400), 400);
        assert!(!parse_or(Some("false"), true));
    }

    #[test]
    fn place_search_mode_accepts_aliases() {
        assert_eq!(PlaceSearchMode::parse("Autocomplete"), Some(PlaceSearchMode::Autocomplete));
        assert_eq!(PlaceSearchMode::parse("text"), Some(PlaceSearchMode::PlainText));
        assert_eq!(PlaceSearchMode::parse(" plain "), Some(PlaceSearchMode::PlainText));
        assert_eq!(PlaceSearchMode::parse("voice"), None);
    }

    #[test]
    fn missing_api_key_reads_as_none() {
        let mut config = AppConfig::default();
        assert_eq!(config.maps_api_key(), None);

        config.google_maps_api_key = "abc".to_string();
        assert_eq!(config.maps_api_key(), Some("abc"));
    }

    #[test]
    fn defaults_center_on_sao_paulo() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.default_center_lat, -23.550520);
        assert_eq!(config.map_config.default_center_lng, -46.633308);
        assert_eq!(config.map_config.default_zoom, 13.0);
        assert_eq!(config.session_storage_key, "motorista");
    }
}

// ============================================================================
// PLACES - Convertir la entrada del usuario en un `Place`
// ============================================================================
// Autocomplete: solo se emite si hay geometry.location Y dirección.
// Texto plano: se emite el valor completo del input, sin coordenadas.
// ============================================================================

use wasm_bindgen::{JsCast, JsValue};

use crate::models::{Coordinates, Place};

/// Lugar devuelto por un proveedor de autocompletado
pub trait PlaceCandidate {
    fn formatted_address(&self) -> Option<String>;
    fn name(&self) -> Option<String>;
    /// `None` si el usuario escribió texto libre sin elegir sugerencia
    fn location(&self) -> Option<Coordinates>;
}

/// `Some(place)` con dirección y coordenadas, o `None` (no se emite nada)
pub fn resolve_selection(candidate: &impl PlaceCandidate) -> Option<Place> {
    let coords = candidate.location()?;
    let address = candidate
        .formatted_address()
        .filter(|a| !a.trim().is_empty())
        .or_else(|| candidate.name().filter(|n| !n.trim().is_empty()))?;

    Some(Place::with_coordinates(address, coords))
}

pub fn place_from_text(text: &str) -> Place {
    Place::from_text(text)
}

/// Objeto `PlaceResult` de Google (`autocomplete.getPlace()`)
pub struct GooglePlaceResult(JsValue);

impl GooglePlaceResult {
    pub fn new(value: JsValue) -> Self {
        Self(value)
    }

    fn field(target: &JsValue, key: &str) -> Option<JsValue> {
        if !target.is_object() {
            return None;
        }
        js_sys::Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    /// `location.lat()` / `location.lng()` son métodos, no propiedades
    fn call_number(target: &JsValue, method: &str) -> Option<f64> {
        let function = Self::field(target, method)?.dyn_into::<js_sys::Function>().ok()?;
        function.call0(target).ok()?.as_f64()
    }
}

impl PlaceCandidate for GooglePlaceResult {
    fn formatted_address(&self) -> Option<String> {
        Self::field(&self.0, "formatted_address")?.as_string()
    }

    fn name(&self) -> Option<String> {
        Self::field(&self.0, "name")?.as_string()
    }

    fn location(&self) -> Option<Coordinates> {
        let geometry = Self::field(&self.0, "geometry")?;
        let location = Self::field(&geometry, "location")?;
        let lat = Self::call_number(&location, "lat")?;
        let lng = Self::call_number(&location, "lng")?;
        Coordinates::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeCandidate {
        formatted_address: Option<String>,
        name: Option<String>,
        location: Option<(f64, f64)>,
    }

    impl PlaceCandidate for FakeCandidate {
        fn formatted_address(&self) -> Option<String> {
            self.formatted_address.clone()
        }

        fn name(&self) -> Option<String> {
            self.name.clone()
        }

        fn location(&self) -> Option<Coordinates> {
            let (lat, lng) = self.location?;
            Coordinates::new(lat, lng)
        }
    }

    #[test]
    fn without_geometry_nothing_is_emitted() {
        let candidate = FakeCandidate {
            formatted_address: Some("Rua Augusta".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_selection(&candidate), None);
    }

    #[test]
    fn with_geometry_address_and_coordinates_are_copied() {
        let candidate = FakeCandidate {
            formatted_address: Some("Av. Paulista, 1578 - Bela Vista, São Paulo - SP".to_string()),
            name: Some("MASP".to_string()),
            location: Some((-23.5614, -46.6559)),
        };

        let place = resolve_selection(&candidate).unwrap();
        assert_eq!(place.address, "Av. Paulista, 1578 - Bela Vista, São Paulo - SP");
        assert_eq!(place.latitude, Some(-23.5614));
        assert_eq!(place.longitude, Some(-46.6559));
    }

    #[test]
    fn name_is_used_when_formatted_address_missing() {
        let candidate = FakeCandidate {
            name: Some("Estação da Luz".to_string()),
            location: Some((-23.5347, -46.6352)),
            ..Default::default()
        };
        assert_eq!(resolve_selection(&candidate).unwrap().address, "Estação da Luz");
    }

    #[test]
    fn coordinates_without_address_are_never_emitted() {
        let candidate = FakeCandidate {
            formatted_address: Some("  ".to_string()),
            location: Some((-23.5, -46.6)),
            ..Default::default()
        };
        assert_eq!(resolve_selection(&candidate), None);
    }

    #[test]
    fn non_finite_location_is_treated_as_missing() {
        let candidate = FakeCandidate {
            formatted_address: Some("Somewhere".to_string()),
            location: Some((f64::NAN, -46.6)),
            ..Default::default()
        };
        assert_eq!(resolve_selection(&candidate), None);
    }

    #[test]
    fn text_place_carries_full_input_value() {
        let mut typed = String::new();
        let mut emitted = Vec::new();
        for ch in "Rua Oscar Freire".chars() {
            typed.push(ch);
            emitted.push(place_from_text(&typed));
        }

        assert_eq!(emitted.len(), "Rua Oscar Freire".chars().count());
        assert_eq!(emitted[2].address, "Rua");
        assert_eq!(emitted.last().unwrap().address, "Rua Oscar Freire");
        assert!(emitted.iter().all(|p| p.latitude.is_none() && p.longitude.is_none()));
    }
}

// Objetos JS con la forma de `PlaceResult`; requieren `wasm-pack test`
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    use super::*;

    fn set(target: &Object, key: &str, value: &JsValue) {
        Reflect::set(target, &JsValue::from_str(key), value).unwrap();
    }

    /// `location` cuyos `lat()`/`lng()` leen de `this`, como en `google.maps.LatLng`
    fn lat_lng(lat: f64, lng: f64) -> Object {
        let location = Object::new();
        set(&location, "_lat", &JsValue::from_f64(lat));
        set(&location, "_lng", &JsValue::from_f64(lng));
        set(&location, "lat", &Function::new_no_args("return this._lat;"));
        set(&location, "lng", &Function::new_no_args("return this._lng;"));
        location
    }

    fn place_result(address: &str, location: Option<Object>) -> GooglePlaceResult {
        let place = Object::new();
        set(&place, "formatted_address", &JsValue::from_str(address));
        if let Some(location) = location {
            let geometry = Object::new();
            set(&geometry, "location", &location);
            set(&place, "geometry", &geometry);
        }
        GooglePlaceResult::new(place.into())
    }

    #[wasm_bindgen_test]
    fn geometry_methods_are_called_for_coordinates() {
        let selected = place_result(
            "Av. Paulista, 1578 - Bela Vista, São Paulo - SP",
            Some(lat_lng(-23.5614, -46.6559)),
        );

        let place = resolve_selection(&selected).unwrap();
        assert_eq!(place.address, "Av. Paulista, 1578 - Bela Vista, São Paulo - SP");
        assert_eq!(place.latitude, Some(-23.5614));
        assert_eq!(place.longitude, Some(-46.6559));
    }

    #[wasm_bindgen_test]
    fn missing_geometry_emits_nothing() {
        let selected = place_result("Rua Augusta", None);
        assert_eq!(resolve_selection(&selected), None);
    }

    #[wasm_bindgen_test]
    fn non_numeric_lat_emits_nothing() {
        let location = lat_lng(0.0, -46.6559);
        set(&location, "lat", &Function::new_no_args("return 'abc';"));

        let selected = place_result("Rua Augusta", Some(location));
        assert_eq!(resolve_selection(&selected), None);
    }

    #[wasm_bindgen_test]
    fn lat_as_plain_property_is_not_a_location() {
        let location = Object::new();
        set(&location, "lat", &JsValue::from_f64(-23.5));
        set(&location, "lng", &JsValue::from_f64(-46.6));

        let selected = place_result("Rua Augusta", Some(location));
        assert_eq!(resolve_selection(&selected), None);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// `None` si alguna coordenada no es un número finito
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self { latitude, longitude })
        } else {
            None
        }
    }
}

/// Lugar resuelto: dirección legible + coordenadas opcionales.
///
/// Solo vive en memoria del dashboard, nunca se persiste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Place {
    /// Lugar de texto libre, sin coordenadas
    pub fn from_text(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(address: impl Into<String>, coords: Coordinates) -> Self {
        Self {
            address: address.into(),
            latitude: Some(coords.latitude),
            longitude: Some(coords.longitude),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_reject_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_none());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_none());
        assert!(Coordinates::new(-23.55, -46.63).is_some());
    }

    #[test]
    fn text_place_has_no_coordinates() {
        let place = Place::from_text("Av. Paulista");
        assert_eq!(place.address, "Av. Paulista");
        assert_eq!(place.coordinates(), None);
    }

    #[test]
    fn coordinates_round_through_place() {
        let coords = Coordinates::new(-23.561, -46.656).unwrap();
        let place = Place::with_coordinates("MASP", coords);
        assert_eq!(place.coordinates(), Some(coords));
    }
}

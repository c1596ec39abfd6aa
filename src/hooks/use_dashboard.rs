// ============================================================================
// USE DASHBOARD HOOK - Origen/destino del dashboard
// ============================================================================
// Hook nativo de Yew - Delega la lógica al reducer de `DashboardState`
// ============================================================================

use yew::prelude::*;

use crate::models::Place;
use crate::state::{DashboardMessage, DashboardState};

/// Texto para la consola: dirección y coordenadas si las hay
fn describe_place(place: &Place) -> String {
    match place.coordinates() {
        Some(c) => format!("{} ({:.6}, {:.6})", place.address, c.latitude, c.longitude),
        None => place.address.clone(),
    }
}

#[derive(Clone)]
pub struct UseDashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub on_origin_selected: Callback<Place>,
    pub on_destination_selected: Callback<Place>,
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let state = use_reducer(DashboardState::default);

    let on_origin_selected = {
        let state = state.clone();
        Callback::from(move |place: Place| {
            log::info!("📍 Origem: {}", describe_place(&place));
            state.dispatch(DashboardMessage::OriginSelected(place));
        })
    };

    let on_destination_selected = {
        let state = state.clone();
        Callback::from(move |place: Place| {
            log::info!("🏁 Destino: {}", describe_place(&place));
            state.dispatch(DashboardMessage::DestinationSelected(place));
        })
    };

    UseDashboardHandle {
        state,
        on_origin_selected,
        on_destination_selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn described_place_includes_coordinates_when_present() {
        let coords = Coordinates::new(-23.5614, -46.6559).unwrap();
        assert_eq!(
            describe_place(&Place::with_coordinates("MASP", coords)),
            "MASP (-23.561400, -46.655900)"
        );
        assert_eq!(describe_place(&Place::from_text("Rua Augusta")), "Rua Augusta");
    }
}

// ============================================================================
// DASHBOARD STATE - Origen/destino seleccionados
// ============================================================================
// Solo en memoria: se pierde al salir del dashboard o recargar la página.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::models::Place;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMessage {
    OriginSelected(Place),
    DestinationSelected(Place),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub origin: Option<Place>,
    pub destination: Option<Place>,
}

impl DashboardState {
    /// Cada mensaje sobrescribe su campo con el último `Place` recibido
    pub fn apply(&self, message: DashboardMessage) -> Self {
        let mut next = self.clone();
        match message {
            DashboardMessage::OriginSelected(place) => next.origin = Some(place),
            DashboardMessage::DestinationSelected(place) => next.destination = Some(place),
        }
        next
    }

    /// El mapa se muestra en cuanto hay origen o destino
    pub fn show_map(&self) -> bool {
        self.origin.is_some() || self.destination.is_some()
    }
}

impl Reducible for DashboardState {
    type Action = DashboardMessage;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

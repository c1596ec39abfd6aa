pub mod maps_loader;
pub mod places;

pub use maps_loader::{load_maps_script, script_url};
pub use places::{place_from_text, resolve_selection, GooglePlaceResult, PlaceCandidate};

pub mod session_context;
pub mod use_dashboard;
pub mod use_maps_script;

pub use session_context::{use_login_viewmodel, SessionContext, SessionContextProvider};
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
pub use use_maps_script::{use_maps_state, MapsProvider};

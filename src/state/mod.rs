// ============================================================================
// STATE MODULE - Estado de vistas (reducers)
// ============================================================================

pub mod dashboard_state;

pub use dashboard_state::{DashboardMessage, DashboardState};

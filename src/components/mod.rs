pub mod app;
pub mod dashboard;
pub mod login_screen;
pub mod map_view;
pub mod not_found;
pub mod place_search;

pub use app::App;
pub use dashboard::Dashboard;
pub use login_screen::LoginScreen;
pub use map_view::MapView;
pub use not_found::NotFound;
pub use place_search::PlaceSearch;

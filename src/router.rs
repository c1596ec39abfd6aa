// ============================================================================
// ROUTER - Rutas de la app (sin guardas: /dashboard es accesible sin sesión)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Dashboard, LoginScreen, NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Login => html! { <LoginScreen /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Navega con el router; sin `Navigator` (fuera de BrowserRouter) recarga la URL
pub fn navigate(navigator: Option<&Navigator>, route: Route) {
    match navigator {
        Some(navigator) => navigator.push(&route),
        None => {
            let path = route.to_path();
            let result = web_sys::window()
                .map(|w| w.location().set_href(&path))
                .unwrap_or(Ok(()));
            if result.is_err() {
                log::error!("❌ No se pudo navegar a {}", path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
    }

    #[test]
    fn not_found_is_the_fallback_route() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_to_expected_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    }
}

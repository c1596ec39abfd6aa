use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_dashboard, use_login_viewmodel, MapsProvider};
use crate::router::{navigate, Route};
use crate::utils::{t, t_with};

use super::{MapView, PlaceSearch};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let lang = CONFIG.language;
    let dashboard = use_dashboard();
    let viewmodel = use_login_viewmodel();
    let navigator = use_navigator();

    // Sin guarda: sin sesión se muestra el saludo genérico
    let greeting = {
        let viewmodel = viewmodel.clone();
        use_memo((), move |_| match viewmodel.current_session() {
            Some(session) => t_with("bem_vindo_motorista", lang, session.identifier()),
            None => t("bem_vindo", lang),
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        let route = viewmodel.logout().unwrap_or_else(|e| {
            log::error!("❌ No se pudo borrar la sesión: {}", e);
            Route::Home
        });
        navigate(navigator.as_ref(), route);
    });

    let state = &*dashboard.state;

    html! {
        <MapsProvider>
            <div class="dashboard">
                <header class="dashboard-header">
                    <h1>{(*greeting).clone()}</h1>
                    <button type="button" class="btn-logout" onclick={on_logout}>
                        {t("sair", lang)}
                    </button>
                </header>

                <h2>{t("solicitar_corrida", lang)}</h2>

                <div class="form-group">
                    <label class="field-label" for="origin-search">{t("origem", lang)}</label>
                    <PlaceSearch
                        id="origin-search"
                        on_place_selected={dashboard.on_origin_selected.clone()}
                    />
                </div>

                <div class="form-group">
                    <label class="field-label" for="destination-search">{t("destino", lang)}</label>
                    <PlaceSearch
                        id="destination-search"
                        on_place_selected={dashboard.on_destination_selected.clone()}
                    />
                </div>

                if state.show_map() {
                    <section class="map-section">
                        <h2>{t("mapa", lang)}</h2>
                        <MapView
                            origin={state.origin.clone()}
                            destination={state.destination.clone()}
                        />
                    </section>
                }
            </div>
        </MapsProvider>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::router::Route;
use crate::utils::t;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let lang = CONFIG.language;

    html! {
        <div class="not-found">
            <h1>{t("pagina_nao_encontrada", lang)}</h1>
            <Link<Route> to={Route::Home}>{t("voltar_login", lang)}</Link<Route>>
        </div>
    }
}

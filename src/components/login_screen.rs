use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_login_viewmodel;
use crate::router::navigate;
use crate::utils::{show_alert, t};
use crate::viewmodels::{AuthMessage, LoginError, LoginForm};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let lang = CONFIG.language;
    let viewmodel = use_login_viewmodel();
    let navigator = use_navigator();
    let cpf_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let cpf_ref = cpf_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let identifier = cpf_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            match viewmodel.handle(AuthMessage::LoginSubmitted(LoginForm::new(identifier, password))) {
                Ok(route) => navigate(navigator.as_ref(), route),
                Err(LoginError::EmptyIdentifier) => show_alert(&t("preencha_campos", lang)),
                Err(e) => {
                    log::error!("❌ Error en login: {}", e);
                    show_alert(&e.to_string());
                }
            }
        })
    };

    html! {
        <div class="login-screen">
            <form class="login-form" onsubmit={on_submit}>
                <h2>{t("login_motorista", lang)}</h2>
                <input
                    type="text"
                    id="cpf"
                    name="cpf"
                    class="form-input"
                    inputmode="numeric"
                    autocomplete="username"
                    placeholder={t("cpf", lang)}
                    ref={cpf_ref}
                />
                <input
                    type="password"
                    id="senha"
                    name="senha"
                    class="form-input"
                    autocomplete="current-password"
                    placeholder={t("senha", lang)}
                    ref={password_ref}
                />
                <button type="submit" class="btn-login">
                    {t("entrar", lang)}
                </button>
            </form>
        </div>
    }
}

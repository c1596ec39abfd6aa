// ============================================================================
// SESSION CONTEXT - Compartir el SessionStore entre vistas
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::stores::{default_session_store, SessionStore};
use crate::viewmodels::LoginViewModel;

#[derive(Clone)]
pub struct SessionContext {
    pub store: Rc<dyn SessionStore>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app; el store se crea una sola vez
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let context = use_state(|| SessionContext {
        store: default_session_store(),
    });

    html! {
        <ContextProvider<SessionContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// ViewModel de login sobre el store del contexto (o uno por defecto si no hay provider)
#[hook]
pub fn use_login_viewmodel() -> LoginViewModel {
    let context = use_context::<SessionContext>();
    let store = match context {
        Some(ctx) => ctx.store,
        None => {
            log::warn!("⚠️ SessionContextProvider no montado, usando store por defecto");
            default_session_store()
        }
    };
    LoginViewModel::new(store)
}

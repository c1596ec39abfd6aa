use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::SessionContextProvider;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionContextProvider>
                <Switch<Route> render={switch} />
            </SessionContextProvider>
        </BrowserRouter>
    }
}

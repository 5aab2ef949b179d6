use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthContext, AuthProvider};
use crate::components::common_toast::{Toast, ToastContext, ToastProvider};
use crate::config::Config;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod oauth;
pub mod pages {
    pub mod dashboard;
    pub mod influencer_register;
    pub mod login;
    pub mod register;
    pub mod settings;
}

use pages::{dashboard::Dashboard, login::Login, register::CompanyRegister, settings::Settings};
use shared::UserType;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/company_login")]
    CompanyLogin,
    #[at("/company_register")]
    CompanyRegister,
    #[at("/influencer_login")]
    InfluencerLogin,
    #[at("/dashboard")]
    Dashboard,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only with a stored session; otherwise sends the
/// visitor to the company login
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().expect("Navigator not found");
    let is_authenticated = auth.state.authenticated;
    let session_expired = auth.state.session_expired;

    {
        use_effect_with(session_expired, move |expired| {
            if *expired {
                let toast = Toast::info("Your session has expired. Please log in again.").with_duration(8000);
                toast_context.show(toast);
            }
            || ()
        });
    }

    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |is_auth| {
            if !*is_auth {
                navigator.push(&Route::CompanyLogin);
            }
            || ()
        });
    }

    if is_authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}

/// Sign-in pages; a signed-in visitor goes straight to the dashboard
#[function_component(PublicRoute)]
pub fn public_route(props: &Props) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");

    if auth.state.authenticated {
        html! { <Redirect<Route> to={Route::Dashboard} /> }
    } else {
        html! { <>{props.children.clone()}</> }
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::CompanyLogin => html! {
            <PublicRoute>
                <Login role={UserType::Company} />
            </PublicRoute>
        },
        Route::CompanyRegister => html! {
            <PublicRoute>
                <CompanyRegister />
            </PublicRoute>
        },
        Route::InfluencerLogin => html! {
            <PublicRoute>
                <Login role={UserType::Influencer} />
            </PublicRoute>
        },
        Route::Dashboard => html! {
            <ProtectedRoute>
                <Dashboard />
            </ProtectedRoute>
        },
        Route::Settings => html! {
            <ProtectedRoute>
                <Settings />
            </ProtectedRoute>
        },
        Route::Root | Route::NotFound => {
            debug!("Unknown route, redirecting to login");
            html! { <Redirect<Route> to={Route::CompanyLogin} /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Starting dashboard against {}", Config::api_base_url());

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}

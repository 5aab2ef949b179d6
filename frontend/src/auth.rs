use gloo_timers::callback::Interval;
use log::{debug, error};
use shared::{User, UserType};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::{ApiResult, BrowserClient};

/// How often the signed-in user is re-fetched to detect a dead session
const HEARTBEAT_INTERVAL_MS: u32 = 300_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub session_expired: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<UserType> {
        self.user.as_ref().map(|user| user.user_type)
    }

    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(User::display_name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSuccess(Option<User>),
    LoginError(String),
    LogoutStarted,
    LogoutSuccess,
    UserRefreshed(User),
    SessionExpired,
    SetError(Option<String>),
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess(user) => Rc::new(Self {
                user,
                authenticated: true,
                loading: false,
                error: None,
                session_expired: false,
            }),
            AuthAction::LoginError(error) => Rc::new(Self {
                user: None,
                authenticated: false,
                loading: false,
                error: Some(error),
                session_expired: false,
            }),
            AuthAction::LogoutStarted => Rc::new(Self {
                loading: true,
                ..(*self).clone()
            }),
            AuthAction::LogoutSuccess => Rc::new(Self::default()),
            AuthAction::UserRefreshed(user) => Rc::new(Self {
                user: Some(user),
                ..(*self).clone()
            }),
            AuthAction::SessionExpired => Rc::new(Self {
                user: None,
                authenticated: false,
                loading: false,
                error: Some("Session expired. Please log in again.".to_string()),
                session_expired: true,
            }),
            AuthAction::SetError(error) => Rc::new(Self {
                error,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: UserType,
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<Credentials>,
    /// Marks an already stored session as signed in, e.g. after registration
    pub adopt_session: Callback<()>,
    pub logout: Callback<()>,
    pub session_expired: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(|| {
        let client = BrowserClient::browser();
        AuthState {
            user: client.session().current_user(),
            authenticated: client.session().is_authenticated(),
            ..Default::default()
        }
    });

    // Heartbeat: a failed refresh inside the client clears the tokens and
    // surfaces here as Unauthorized
    {
        let auth = auth.clone();
        use_effect_with(auth.authenticated, move |authenticated| {
            let interval = authenticated.then(|| {
                Interval::new(HEARTBEAT_INTERVAL_MS, move || {
                    let auth = auth.clone();
                    spawn_local(async move {
                        match BrowserClient::browser().user_profile().await {
                            ApiResult::Ok(user) => auth.dispatch(AuthAction::UserRefreshed(user)),
                            ApiResult::Unauthorized => auth.dispatch(AuthAction::SessionExpired),
                            other => debug!("Heartbeat skipped: {:?}", other.error_message()),
                        }
                    });
                })
            });
            move || {
                if let Some(interval) = interval {
                    interval.cancel();
                }
            }
        });
    }

    let login = {
        let auth = auth.clone();
        Callback::from(move |credentials: Credentials| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);
                let client = BrowserClient::browser();
                let result = match credentials.role {
                    UserType::Company => {
                        client
                            .login(&credentials.email, &credentials.password, UserType::Company)
                            .await
                    }
                    UserType::Influencer => {
                        client
                            .login_influencer(&credentials.email, &credentials.password)
                            .await
                    }
                };
                match result {
                    ApiResult::Ok(response) => {
                        let user = response.user.or_else(|| client.session().current_user());
                        auth.dispatch(AuthAction::LoginSuccess(user));
                    }
                    other => {
                        let message = other
                            .error_message()
                            .unwrap_or_else(|| "Login failed".to_string());
                        error!("Login failed: {}", message);
                        auth.dispatch(AuthAction::LoginError(message));
                    }
                }
            });
        })
    };

    let adopt_session = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let client = BrowserClient::browser();
            if client.session().is_authenticated() {
                auth.dispatch(AuthAction::LoginSuccess(client.session().current_user()));
            }
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LogoutStarted);
                BrowserClient::browser().logout().await;
                auth.dispatch(AuthAction::LogoutSuccess);
            });
        })
    };

    let session_expired = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::SessionExpired))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        adopt_session,
        logout,
        session_expired,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

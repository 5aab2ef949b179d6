use log::debug;
use shared::dto::auth::LoginRequest;
use shared::UserType;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthContext, Credentials};
use crate::components::form_field::{bind, FormField};
use crate::pages::influencer_register::InfluencerRegisterForm;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub role: UserType,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let registering = use_state(|| false);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().expect("Navigator not found");
    let role = props.role;

    // Redirect to the dashboard once signed in
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.authenticated, move |authenticated| {
            if *authenticated {
                debug!("Login successful, redirecting to dashboard");
                navigator.push(&Route::Dashboard);
            }
            || ()
        });
    }

    {
        let error = error.clone();
        use_effect_with(auth.state.error.clone(), move |auth_error| {
            if let Some(message) = auth_error {
                error.set(message.clone());
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
                user_type: role,
            };

            if request.email.is_empty() || request.password.is_empty() {
                error.set("Please enter both email and password".to_string());
                return;
            }
            if let Err(e) = request.check() {
                error.set(e.message().to_string());
                return;
            }

            error.set(String::new());
            auth.login.emit(Credentials {
                email: request.email,
                password: request.password,
                role,
            });
        })
    };

    let loading = auth.state.loading;
    let (title, subtitle) = match role {
        UserType::Company => ("Business Login", "Sign in to manage your brand analytics"),
        UserType::Influencer => ("Influencer Login", "Sign in to see your audience insights"),
    };

    if *registering {
        let on_cancel = {
            let registering = registering.clone();
            Callback::from(move |_| registering.set(false))
        };
        return html! {
            <AuthLayout title="Create your influencer account" subtitle="It takes less than a minute">
                <InfluencerRegisterForm on_cancel={on_cancel} />
            </AuthLayout>
        };
    }

    html! {
        <AuthLayout title={title} subtitle={subtitle}>
            <form class="space-y-5" onsubmit={onsubmit}>
                if !error.is_empty() {
                    <div class="p-3 bg-red-50 border border-red-200 rounded-lg">
                        <p class="text-sm text-red-800">{error.to_string()}</p>
                    </div>
                }
                <FormField
                    label="Email"
                    name="email"
                    input_type="email"
                    placeholder="name@company.com"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                    disabled={loading}
                />
                <FormField
                    label="Password"
                    name="password"
                    input_type="password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                    disabled={loading}
                />
                <button
                    type="submit"
                    disabled={loading}
                    class="w-full py-3 rounded-xl text-white font-semibold bg-orange-500 hover:bg-orange-600 disabled:opacity-50"
                >
                    if loading { {"Signing in..."} } else { {"Sign in"} }
                </button>
            </form>
            <div class="mt-6 text-center text-sm text-gray-600 space-y-2">
                {match role {
                    UserType::Company => html! {
                        <>
                            <p>
                                {"No account yet? "}
                                <Link<Route> to={Route::CompanyRegister} classes="text-orange-600 font-semibold">{"Sign up as a business"}</Link<Route>>
                            </p>
                            <p>
                                <Link<Route> to={Route::InfluencerLogin} classes="text-gray-500 hover:text-gray-700">{"Are you an influencer?"}</Link<Route>>
                            </p>
                        </>
                    },
                    UserType::Influencer => {
                        let registering = registering.clone();
                        html! {
                            <>
                                <p>
                                    {"New here? "}
                                    <button class="text-orange-600 font-semibold" onclick={Callback::from(move |_| registering.set(true))}>
                                        {"Create an influencer account"}
                                    </button>
                                </p>
                                <p>
                                    <Link<Route> to={Route::CompanyLogin} classes="text-gray-500 hover:text-gray-700">{"Signing in for a business?"}</Link<Route>>
                                </p>
                            </>
                        }
                    }
                }}
            </div>
        </AuthLayout>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
    pub children: Children,
}

/// Centered card shared by the sign-in and sign-up pages
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-400/10 via-orange-300/5 to-orange-500/10 flex items-center justify-center p-8">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <span class="text-2xl font-light italic text-gray-800 tracking-wider">{"infofluencer"}</span>
                </div>
                <div class="bg-white/95 rounded-3xl shadow-2xl p-8 border border-white/20">
                    <div class="mb-8">
                        <h2 class="text-3xl font-bold text-gray-900 mb-3">{&props.title}</h2>
                        <p class="text-gray-600 leading-relaxed">{&props.subtitle}</p>
                    </div>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

use log::info;
use shared::dto::auth::InfluencerRegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiResult, BrowserClient};
use crate::auth::AuthContext;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::form_field::{bind, FormField};

#[derive(Properties, PartialEq)]
pub struct InfluencerRegisterFormProps {
    pub on_cancel: Callback<()>,
}

/// Influencer sign-up; a successful registration signs the account in
#[function_component(InfluencerRegisterForm)]
pub fn influencer_register_form(props: &InfluencerRegisterFormProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let name = use_state(String::new);
    let surname = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let surname = surname.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password != *confirm_password {
                error.set("Passwords do not match".to_string());
                return;
            }

            let request = InfluencerRegisterRequest {
                name: name.trim().to_string(),
                surname: surname.trim().to_string(),
                email: email.trim().to_string(),
                password: password.to_string(),
            };
            if let Err(e) = request.check() {
                error.set(e.message().to_string());
                return;
            }

            let error = error.clone();
            let loading = loading.clone();
            let adopt_session = auth.adopt_session.clone();
            let toast = toast.clone();
            loading.set(true);
            error.set(String::new());
            spawn_local(async move {
                match BrowserClient::browser().register_influencer(&request).await {
                    ApiResult::Ok(_) => {
                        info!("Influencer account created");
                        toast.show(Toast::success("Welcome to Infofluencer!"));
                        adopt_session.emit(());
                    }
                    other => error.set(
                        other
                            .error_message()
                            .unwrap_or_else(|| "Registration failed".to_string()),
                    ),
                }
                loading.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="space-y-5" onsubmit={onsubmit}>
            if !error.is_empty() {
                <div class="p-3 bg-red-50 border border-red-200 rounded-lg">
                    <p class="text-sm text-red-800">{error.to_string()}</p>
                </div>
            }
            <div class="grid grid-cols-2 gap-4">
                <FormField label="Name" name="name" value={(*name).clone()} oninput={bind(&name)} disabled={*loading} />
                <FormField label="Surname" name="surname" value={(*surname).clone()} oninput={bind(&surname)} disabled={*loading} />
            </div>
            <FormField label="Email" name="email" input_type="email" value={(*email).clone()} oninput={bind(&email)} disabled={*loading} />
            <FormField label="Password" name="password" input_type="password" value={(*password).clone()} oninput={bind(&password)} disabled={*loading} />
            <FormField
                label="Confirm Password"
                name="confirm_password"
                input_type="password"
                value={(*confirm_password).clone()}
                oninput={bind(&confirm_password)}
                disabled={*loading}
            />
            <button
                type="submit"
                disabled={*loading}
                class="w-full py-3 rounded-xl text-white font-semibold bg-orange-500 hover:bg-orange-600 disabled:opacity-50"
            >
                if *loading { {"Creating account..."} } else { {"Create account"} }
            </button>
            <button type="button" onclick={on_cancel} class="w-full text-sm text-gray-500 hover:text-gray-700">
                {"Back to login"}
            </button>
        </form>
    }
}

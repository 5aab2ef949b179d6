use log::info;
use shared::dto::auth::CompanyRegisterRequest;
use shared::{validate_company_email, UserType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiResult, BrowserClient};
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::form_field::{bind, FormField};
use crate::pages::login::AuthLayout;
use crate::Route;

#[function_component(CompanyRegister)]
pub fn company_register() -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().expect("Navigator not found");
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let company = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    // Checked on every keystroke
    let email_check = validate_company_email(email.trim());

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let company = company.clone();
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

            let company_name = company.trim().to_string();
            let request = CompanyRegisterRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
                company: (!company_name.is_empty()).then_some(company_name),
                user_type: UserType::Company,
            };
            if let Err(e) = request.check() {
                error.set(e.message().to_string());
                return;
            }

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            loading.set(true);
            error.set(String::new());
            spawn_local(async move {
                match BrowserClient::browser().register_company(&request).await {
                    ApiResult::Ok(_) => {
                        info!("Company account registered");
                        toast.show(Toast::success(
                            "Registration successful! Please log in with your credentials.",
                        ));
                        navigator.push(&Route::CompanyLogin);
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

    let email_class = match (email_check.is_checked, email_check.is_valid) {
        (false, _) => classes!("border-gray-200"),
        (true, true) => classes!("border-green-400"),
        (true, false) => classes!("border-red-400"),
    };

    html! {
        <AuthLayout
            title="Sign up as a Business"
            subtitle="For brands, agencies, and ecommerce stores who want to boost their influencer marketing"
        >
            <form class="space-y-5" onsubmit={onsubmit}>
                if !error.is_empty() {
                    <div class="p-3 bg-red-50 border border-red-200 rounded-lg">
                        <p class="text-sm text-red-800">{error.to_string()}</p>
                    </div>
                }
                <div class="grid grid-cols-2 gap-4">
                    <FormField label="First Name" name="first_name" placeholder="John" value={(*first_name).clone()} oninput={bind(&first_name)} disabled={*loading} />
                    <FormField label="Last Name" name="last_name" placeholder="Doe" value={(*last_name).clone()} oninput={bind(&last_name)} disabled={*loading} />
                </div>
                <div>
                    <FormField
                        label="Work Email"
                        name="email"
                        input_type="email"
                        placeholder="name@company.com"
                        value={(*email).clone()}
                        oninput={bind(&email)}
                        disabled={*loading}
                        input_class={email_class}
                    />
                    if email_check.is_checked {
                        <p class={classes!("mt-1", "text-xs", if email_check.is_valid { "text-green-600" } else { "text-red-600" })}>
                            {&email_check.message}
                        </p>
                    }
                </div>
                <FormField label="Company" name="company" placeholder="Acme Media" value={(*company).clone()} oninput={bind(&company)} disabled={*loading} required={false} />
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
                    disabled={*loading || (email_check.is_checked && !email_check.is_valid)}
                    class="w-full py-3 rounded-xl text-white font-semibold bg-orange-500 hover:bg-orange-600 disabled:opacity-50"
                >
                    if *loading { {"Creating account..."} } else { {"Create business account"} }
                </button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                {"Already registered? "}
                <Link<Route> to={Route::CompanyLogin} classes="text-orange-600 font-semibold">{"Back to login"}</Link<Route>>
            </p>
        </AuthLayout>
    }
}

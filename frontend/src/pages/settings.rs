use shared::{AccountInfo, ApiConnectionSetting, BillingInfo, NotificationPreferences, SecuritySettings};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::settings::SettingsPanel;
use crate::api::{ApiResult, BrowserClient};
use crate::auth::AuthContext;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::form_field::FormField;
use crate::components::loading::{render_pending, Loadable};
use crate::components::sidebar::Sidebar;

/// Toast for a finished save
fn save_toast<T>(result: &ApiResult<T>, panel: SettingsPanel) -> Toast {
    match result.error_message() {
        None => Toast::success(format!("{} settings saved", panel.title())),
        Some(message) => Toast::error(message),
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let panel = use_state(|| SettingsPanel::Account);

    html! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />
            <main class="flex-1 p-8 overflow-y-auto space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{"Settings"}</h2>
                    <p class="mt-1 text-gray-600">{"Manage your account and preferences"}</p>
                </div>
                <div class="border-b border-gray-200">
                    <nav class="-mb-px flex space-x-8">
                        {SettingsPanel::ALL.iter().map(|tab| {
                            let tab = *tab;
                            let is_active = *panel == tab;
                            let panel = panel.clone();
                            html! {
                                <button
                                    class={classes!(
                                        "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                        if is_active {
                                            classes!("border-orange-500", "text-orange-600")
                                        } else {
                                            classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                        }
                                    )}
                                    onclick={Callback::from(move |_| panel.set(tab))}
                                >
                                    {tab.title()}
                                </button>
                            }
                        }).collect::<Html>()}
                    </nav>
                </div>
                {match *panel {
                    SettingsPanel::Account => html! { <AccountPanel /> },
                    SettingsPanel::ApiConnections => html! { <ApiConnectionsPanel /> },
                    SettingsPanel::Notifications => html! { <NotificationsPanel /> },
                    SettingsPanel::Security => html! { <SecurityPanel /> },
                    SettingsPanel::Billing => html! { <BillingPanel /> },
                }}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToggleProps {
    label: AttrValue,
    #[prop_or_default]
    description: AttrValue,
    checked: bool,
    on_change: Callback<bool>,
}

#[function_component(Toggle)]
fn toggle(props: &ToggleProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.checked());
        })
    };

    html! {
        <label class="flex items-start justify-between py-3">
            <span>
                <span class="block text-sm font-medium text-gray-800">{&props.label}</span>
                <span class="block text-xs text-gray-500">{&props.description}</span>
            </span>
            <input type="checkbox" class="h-5 w-5 accent-orange-500" checked={props.checked} onchange={onchange} />
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct SaveButtonProps {
    saving: bool,
}

#[function_component(SaveButton)]
fn save_button(props: &SaveButtonProps) -> Html {
    html! {
        <button
            type="submit"
            disabled={props.saving}
            class="px-5 py-2 text-sm rounded-md bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
        >
            if props.saving { {"Saving..."} } else { {"Save changes"} }
        </button>
    }
}

#[function_component(AccountPanel)]
fn account_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let state = use_state(|| Loadable::<AccountInfo>::Loading);
    let saving = use_state(|| false);

    {
        let state = state.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().account_info().await;
                state.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&state) {
        return pending;
    }
    let Loadable::Ready(info) = (*state).clone() else {
        return html! {};
    };

    let edit = |apply: fn(&mut AccountInfo, String)| {
        let state = state.clone();
        let info = info.clone();
        Callback::from(move |value: String| {
            let mut info = info.clone();
            apply(&mut info, value);
            state.set(Loadable::Ready(info));
        })
    };

    let onsubmit = {
        let info = info.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = info.check() {
                toast.show(Toast::error(e.message()));
                return;
            }
            let info = info.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            saving.set(true);
            spawn_local(async move {
                let result = BrowserClient::browser().update_account_info(&info).await;
                toast.show(save_toast(&result, SettingsPanel::Account));
                saving.set(false);
            });
        })
    };

    html! {
        <form class="bg-white rounded-lg shadow p-6 space-y-5 max-w-2xl" onsubmit={onsubmit}>
            <FormField label="Company Name" name="company_name" value={info.company_name.clone()} oninput={edit(|info, value| info.company_name = value)} />
            <div class="grid grid-cols-2 gap-4">
                <FormField label="Contact Person" name="contact_person" required={false} value={info.contact_person.clone()} oninput={edit(|info, value| info.contact_person = value)} />
                <FormField label="Position" name="position" required={false} value={info.position.clone()} oninput={edit(|info, value| info.position = value)} />
            </div>
            <FormField label="Phone" name="phone" input_type="tel" required={false} value={info.phone.clone()} oninput={edit(|info, value| info.phone = value)} />
            if let Some(email) = &info.email {
                <p class="text-sm text-gray-500">{format!("Signed in as {}", email)}</p>
            }
            <SaveButton saving={*saving} />
        </form>
    }
}

#[function_component(ApiConnectionsPanel)]
fn api_connections_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let state = use_state(|| Loadable::<Vec<ApiConnectionSetting>>::Loading);

    {
        let state = state.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().api_connections().await;
                state.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&state) {
        return pending;
    }
    let Loadable::Ready(connections) = (*state).clone() else {
        return html! {};
    };

    html! {
        <div class="bg-white rounded-lg shadow p-6 divide-y divide-gray-100 max-w-2xl">
            if connections.is_empty() {
                <p class="text-sm text-gray-400">{"No providers configured"}</p>
            }
            {connections.iter().enumerate().map(|(index, connection)| {
                let on_change = {
                    let state = state.clone();
                    let connections = connections.clone();
                    let toast = toast.clone();
                    Callback::from(move |active: bool| {
                        let mut connections = connections.clone();
                        connections[index].is_active = active;
                        let updated = connections[index].clone();
                        state.set(Loadable::Ready(connections));

                        let toast = toast.clone();
                        spawn_local(async move {
                            let result = BrowserClient::browser().update_api_connection(&updated).await;
                            toast.show(save_toast(&result, SettingsPanel::ApiConnections));
                        });
                    })
                };
                let description = connection
                    .last_connected
                    .as_deref()
                    .map(|at| format!("Last connected {}", at))
                    .unwrap_or_else(|| "Never connected".to_string());
                html! {
                    <Toggle
                        key={connection.provider.clone()}
                        label={connection.provider.clone()}
                        description={description}
                        checked={connection.is_active}
                        on_change={on_change}
                    />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[function_component(NotificationsPanel)]
fn notifications_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let state = use_state(|| Loadable::<NotificationPreferences>::Loading);
    let saving = use_state(|| false);

    {
        let state = state.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().notification_preferences().await;
                state.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&state) {
        return pending;
    }
    let Loadable::Ready(preferences) = (*state).clone() else {
        return html! {};
    };

    let edit = |apply: fn(&mut NotificationPreferences, bool)| {
        let state = state.clone();
        let preferences = preferences.clone();
        Callback::from(move |value: bool| {
            let mut preferences = preferences.clone();
            apply(&mut preferences, value);
            state.set(Loadable::Ready(preferences));
        })
    };

    let onsubmit = {
        let preferences = preferences.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let preferences = preferences.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            saving.set(true);
            spawn_local(async move {
                let result = BrowserClient::browser()
                    .update_notification_preferences(&preferences)
                    .await;
                toast.show(save_toast(&result, SettingsPanel::Notifications));
                saving.set(false);
            });
        })
    };

    html! {
        <form class="bg-white rounded-lg shadow p-6 divide-y divide-gray-100 max-w-2xl" onsubmit={onsubmit}>
            <Toggle label="Email reports" description="Weekly summary of your analytics" checked={preferences.email_reports} on_change={edit(|p, v| p.email_reports = v)} />
            <Toggle label="Campaign end" description="When a campaign finishes" checked={preferences.campaign_end} on_change={edit(|p, v| p.campaign_end = v)} />
            <Toggle label="Integration errors" description="When a connected account stops syncing" checked={preferences.integration_error} on_change={edit(|p, v| p.integration_error = v)} />
            <Toggle label="Push notifications" description="Browser notifications" checked={preferences.push_enabled} on_change={edit(|p, v| p.push_enabled = v)} />
            <div class="pt-4"><SaveButton saving={*saving} /></div>
        </form>
    }
}

#[function_component(SecurityPanel)]
fn security_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let state = use_state(|| Loadable::<SecuritySettings>::Loading);
    let saving = use_state(|| false);

    {
        let state = state.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().security_settings().await;
                state.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&state) {
        return pending;
    }
    let Loadable::Ready(security) = (*state).clone() else {
        return html! {};
    };

    let on_two_factor = {
        let state = state.clone();
        let security = security.clone();
        Callback::from(move |enabled: bool| {
            state.set(Loadable::Ready(SecuritySettings {
                two_factor_enabled: enabled,
                ..security.clone()
            }))
        })
    };

    let onsubmit = {
        let security = security.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let security = security.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            saving.set(true);
            spawn_local(async move {
                let result = BrowserClient::browser().update_security_settings(&security).await;
                toast.show(save_toast(&result, SettingsPanel::Security));
                saving.set(false);
            });
        })
    };

    html! {
        <form class="bg-white rounded-lg shadow p-6 space-y-4 max-w-2xl" onsubmit={onsubmit}>
            <Toggle
                label="Two-factor authentication"
                description="Ask for a one-time code at sign in"
                checked={security.two_factor_enabled}
                on_change={on_two_factor}
            />
            <p class="text-sm text-gray-500">
                {format!(
                    "Password last changed: {}",
                    security.last_password_change.as_deref().unwrap_or("never")
                )}
            </p>
            <SaveButton saving={*saving} />
        </form>
    }
}

#[function_component(BillingPanel)]
fn billing_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let state = use_state(|| Loadable::<BillingInfo>::Loading);
    let saving = use_state(|| false);

    {
        let state = state.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().billing_info().await;
                state.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&state) {
        return pending;
    }
    let Loadable::Ready(billing) = (*state).clone() else {
        return html! {};
    };

    let on_auto_renew = {
        let state = state.clone();
        let billing = billing.clone();
        Callback::from(move |auto_renew: bool| {
            state.set(Loadable::Ready(BillingInfo {
                auto_renew,
                ..billing.clone()
            }))
        })
    };

    let on_card = {
        let state = state.clone();
        let billing = billing.clone();
        Callback::from(move |card_last4: String| {
            state.set(Loadable::Ready(BillingInfo {
                card_last4,
                ..billing.clone()
            }))
        })
    };

    let onsubmit = {
        let billing = billing.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = billing.check() {
                toast.show(Toast::error(e.message()));
                return;
            }
            let billing = billing.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            saving.set(true);
            spawn_local(async move {
                let result = BrowserClient::browser().update_billing_info(&billing).await;
                toast.show(save_toast(&result, SettingsPanel::Billing));
                saving.set(false);
            });
        })
    };

    html! {
        <form class="bg-white rounded-lg shadow p-6 space-y-4 max-w-2xl" onsubmit={onsubmit}>
            <div>
                <p class="text-sm text-gray-500">{"Active plan"}</p>
                <p class="text-lg font-semibold capitalize">{&billing.active_plan}</p>
            </div>
            <FormField
                label="Card (last 4 digits)"
                name="card_last4"
                required={false}
                placeholder="4242"
                value={billing.card_last4.clone()}
                oninput={on_card}
            />
            <Toggle label="Auto renew" description="Renew the plan at the end of each period" checked={billing.auto_renew} on_change={on_auto_renew} />
            <SaveButton saving={*saving} />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Acknowledgement;

    #[test]
    fn test_save_toast() {
        let saved: ApiResult<Acknowledgement> = ApiResult::Ok(Acknowledgement::default());
        let toast = save_toast(&saved, SettingsPanel::Billing);
        assert_eq!(toast.message, "Billing settings saved");

        let rejected: ApiResult<Acknowledgement> = ApiResult::Rejected {
            status: 400,
            message: "Invalid card".to_string(),
        };
        assert_eq!(save_toast(&rejected, SettingsPanel::Billing).message, "Invalid card");
    }
}

use log::{error, info};
use shared::{ConnectionsResponse, Platform};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{ApiResult, BrowserClient};
use crate::auth::AuthContext;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::loading::{render_pending, Loadable};

const PLATFORMS: [Platform; 3] = [Platform::Ga4, Platform::Youtube, Platform::Instagram];

#[derive(Properties, PartialEq)]
pub struct ConnectionsTabProps {
    /// Bumped by the dashboard to force a re-check, e.g. after a provider redirect
    #[prop_or_default]
    pub refresh: u32,
}

fn describe(platform: Platform) -> &'static str {
    match platform {
        Platform::Ga4 => "Website traffic, audience and acquisition reports",
        Platform::Youtube => "Channel traffic sources, viewer ages and devices",
        Platform::Instagram => "Followers, posts, engagement and audience quality",
    }
}

/// Sends the browser to the provider consent page
fn redirect_to(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().set_href(url) {
                error!("Failed to redirect to provider: {:?}", e);
            }
        }
        None => error!("No window available for redirect"),
    }
}

#[function_component(ConnectionsTab)]
pub fn connections_tab(props: &ConnectionsTabProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let state = use_state(|| Loadable::<ConnectionsResponse>::Loading);
    let reload = use_state(|| 0u32);

    {
        let state = state.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((props.refresh, *reload), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().check_connections().await;
                state.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    let on_changed = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    if let Some(pending) = render_pending(&state) {
        return pending;
    }
    let Loadable::Ready(response) = &*state else {
        return html! {};
    };

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900">{"Connections"}</h2>
                <p class="mt-1 text-gray-600">{"Link the accounts your reports are built from"}</p>
            </div>
            if !response.connections.any() {
                <div class="bg-orange-50 border border-orange-200 text-orange-800 text-sm rounded-md p-4">
                    {"No data source is connected yet. Connect at least one account to see reports."}
                </div>
            }
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                {PLATFORMS.iter().map(|platform| html! {
                    <PlatformCard
                        key={platform.slug()}
                        platform={*platform}
                        connected={response.connections.is_connected(*platform)}
                        on_changed={on_changed.clone()}
                    />
                }).collect::<Html>()}
            </div>
            if response.connections.ga4 {
                <PropertyIdForm
                    current={response.property_id().map(str::to_string)}
                    missing={response.needs_property_id()}
                    on_changed={on_changed.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlatformCardProps {
    platform: Platform,
    connected: bool,
    on_changed: Callback<()>,
}

#[function_component(PlatformCard)]
fn platform_card(props: &PlatformCardProps) -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let account = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let platform = props.platform;

    {
        let account = account.clone();
        use_effect_with(props.connected, move |connected| {
            if *connected {
                spawn_local(async move {
                    if let ApiResult::Ok(status) = BrowserClient::browser().connection_status(platform).await {
                        account.set(status.account_name);
                    }
                });
            } else {
                account.set(None);
            }
            || ()
        });
    }

    let on_connect_click = {
        let busy = busy.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let busy = busy.clone();
            let toast = toast.clone();
            busy.set(true);
            spawn_local(async move {
                match BrowserClient::browser().start_auth(platform).await {
                    ApiResult::Ok(response) => {
                        info!("Redirecting to {} consent page", platform.display_name());
                        redirect_to(&response.authorization_url);
                    }
                    other => {
                        let message = other
                            .error_message()
                            .unwrap_or_else(|| "Authentication failed. Please try again.".to_string());
                        toast.show(Toast::error(message));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let on_disconnect_click = {
        let busy = busy.clone();
        let on_changed = props.on_changed.clone();
        Callback::from(move |_: MouseEvent| {
            let busy = busy.clone();
            let on_changed = on_changed.clone();
            let toast = toast.clone();
            busy.set(true);
            spawn_local(async move {
                match BrowserClient::browser().disconnect(platform).await {
                    ApiResult::Ok(_) => {
                        toast.show(Toast::success(format!("{} disconnected", platform.display_name())));
                        on_changed.emit(());
                    }
                    other => toast.show(Toast::error(
                        other.error_message().unwrap_or_else(|| "API request failed".to_string()),
                    )),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="bg-white rounded-lg shadow p-5 flex flex-col space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold text-gray-900">{platform.display_name()}</h3>
                if props.connected {
                    <span class="px-2 py-0.5 text-xs rounded-full bg-green-100 text-green-700">{"Connected"}</span>
                } else {
                    <span class="px-2 py-0.5 text-xs rounded-full bg-gray-100 text-gray-600">{"Not connected"}</span>
                }
            </div>
            <p class="text-sm text-gray-500 flex-1">{describe(platform)}</p>
            if let Some(name) = &*account {
                <p class="text-xs text-gray-500">{format!("Account: {}", name)}</p>
            }
            if props.connected {
                <button
                    onclick={on_disconnect_click}
                    disabled={*busy}
                    class="px-4 py-2 text-sm rounded-md border border-red-300 text-red-600 hover:bg-red-50 disabled:opacity-50"
                >
                    {"Disconnect"}
                </button>
            } else {
                <button
                    onclick={on_connect_click}
                    disabled={*busy}
                    class="px-4 py-2 text-sm rounded-md bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
                >
                    {format!("Connect {}", platform.display_name())}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PropertyIdFormProps {
    current: Option<String>,
    missing: bool,
    on_changed: Callback<()>,
}

#[function_component(PropertyIdForm)]
fn property_id_form(props: &PropertyIdFormProps) -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let value = use_state(|| props.current.clone().unwrap_or_default());
    let saving = use_state(|| false);

    // Fall back to the dedicated endpoint when the connection check omitted the id
    {
        let value = value.clone();
        let has_current = props.current.is_some();
        use_effect_with(has_current, move |has_current| {
            if !*has_current {
                spawn_local(async move {
                    if let ApiResult::Ok(response) = BrowserClient::browser().ga4_property_id().await {
                        if let Some(id) = response.property_id {
                            value.set(id);
                        }
                    }
                });
            }
            || ()
        });
    }

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    let onsubmit = {
        let value = value.clone();
        let saving = saving.clone();
        let on_changed = props.on_changed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let property_id = value.trim().to_string();
            if property_id.is_empty() {
                toast.show(Toast::error("Please enter a GA4 property ID"));
                return;
            }
            let saving = saving.clone();
            let on_changed = on_changed.clone();
            let toast = toast.clone();
            saving.set(true);
            spawn_local(async move {
                match BrowserClient::browser().save_ga4_property_id(&property_id).await {
                    ApiResult::Ok(_) => {
                        toast.show(Toast::success("GA4 property ID saved"));
                        on_changed.emit(());
                    }
                    other => toast.show(Toast::error(
                        other.error_message().unwrap_or_else(|| "API request failed".to_string()),
                    )),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <form class="bg-white rounded-lg shadow p-5 space-y-3" onsubmit={onsubmit}>
            <h3 class="text-sm font-semibold text-gray-700">{"GA4 Property ID"}</h3>
            if props.missing {
                <p class="text-sm text-orange-700">{"GA4 is connected but no property is selected. Reports stay empty until you add one."}</p>
            }
            <div class="flex space-x-3">
                <input
                    type="text"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-orange-500 focus:border-orange-500"
                    placeholder="e.g. 123456789"
                    value={(*value).clone()}
                    oninput={oninput}
                />
                <button
                    type="submit"
                    disabled={*saving}
                    class="px-4 py-2 text-sm rounded-md bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
                >
                    if *saving { {"Saving..."} } else { {"Save"} }
                </button>
            </div>
        </form>
    }
}

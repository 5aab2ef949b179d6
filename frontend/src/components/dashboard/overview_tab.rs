use shared::format::{display_growth, display_metric, format_compact};
use shared::OverviewDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::BrowserClient;
use crate::auth::AuthContext;
use crate::components::loading::{render_pending, Loadable};
use crate::components::metric_card::MetricCard;

#[function_component(OverviewTab)]
pub fn overview_tab() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let overview = use_state(|| Loadable::<OverviewDto>::Loading);

    {
        let overview = overview.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().overview().await;
                overview.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&overview) {
        return pending;
    }
    let Loadable::Ready(data) = &*overview else {
        return html! {};
    };

    let growth = |value: Option<f64>| AttrValue::from(format!("{} vs last period", display_growth(value)));

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900">{"Overview"}</h2>
                <p class="mt-1 text-gray-600">{"Website traffic at a glance"}</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <MetricCard
                    title="Total Sessions"
                    icon="🧭"
                    value={format_compact(Some(data.total_sessions as f64))}
                    subtitle={growth(data.session_growth)}
                />
                <MetricCard
                    title="Active Users"
                    icon="👥"
                    value={format_compact(Some(data.active_users as f64))}
                    subtitle={growth(data.user_growth)}
                />
                <MetricCard
                    title="Engagement Rate"
                    icon="💬"
                    value={display_metric(Some(data.engagement_rate), 1, "%")}
                    subtitle={growth(data.engagement_growth)}
                />
                <MetricCard
                    title="Bounce Rate"
                    icon="↩"
                    value={display_metric(Some(data.bounce_rate), 1, "%")}
                    subtitle={growth(data.bounce_growth)}
                />
            </div>
        </div>
    }
}

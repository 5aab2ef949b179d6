use shared::demographics::{known_rows, Gender, LabeledValue};
use shared::format::{display_metric, format_grouped, top_n};
use shared::{AudienceDto, DemographicBreakdown, TrafficDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::BrowserClient;
use crate::auth::AuthContext;
use crate::components::bar_list::BarList;
use crate::components::loading::{render_pending, Loadable};

/// Rows kept in every ranked list
const TOP_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsView {
    Audience,
    Traffic,
    Devices,
}

impl AnalyticsView {
    const ALL: [AnalyticsView; 3] = [AnalyticsView::Audience, AnalyticsView::Traffic, AnalyticsView::Devices];

    fn label(&self) -> &'static str {
        match self {
            AnalyticsView::Audience => "Audience",
            AnalyticsView::Traffic => "Traffic",
            AnalyticsView::Devices => "Devices",
        }
    }
}

/// Largest `TOP_LIMIT` entries of a known-only list
pub fn ranked(values: Vec<LabeledValue>) -> Vec<LabeledValue> {
    top_n(&values, |value| value.value, TOP_LIMIT)
}

#[function_component(AnalyticsTab)]
pub fn analytics_tab() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let view = use_state(|| AnalyticsView::Audience);
    let audience = use_state(|| Loadable::<AudienceDto>::Loading);
    let traffic = use_state(|| Loadable::<TrafficDto>::Loading);

    {
        let audience = audience.clone();
        let traffic = traffic.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = BrowserClient::browser();
                let result = client.audience().await;
                audience.set(Loadable::settle(result, &on_expired));
                let result = client.traffic().await;
                traffic.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    let body = match *view {
        AnalyticsView::Audience => render_pending(&audience).unwrap_or_else(|| match &*audience {
            Loadable::Ready(data) => render_audience(data),
            _ => html! {},
        }),
        AnalyticsView::Traffic => render_pending(&traffic).unwrap_or_else(|| match &*traffic {
            Loadable::Ready(data) => render_traffic(data),
            _ => html! {},
        }),
        AnalyticsView::Devices => render_pending(&traffic).unwrap_or_else(|| match &*traffic {
            Loadable::Ready(data) => render_devices(data),
            _ => html! {},
        }),
    };

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900">{"Analyses"}</h2>
                <p class="mt-1 text-gray-600">{"Who visits and how they find you"}</p>
            </div>
            <div class="border-b border-gray-200">
                <nav class="-mb-px flex space-x-8">
                    {AnalyticsView::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let is_active = *view == tab;
                        let view = view.clone();
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
                                onclick={Callback::from(move |_| view.set(tab))}
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect::<Html>()}
                </nav>
            </div>
            {body}
        </div>
    }
}

fn render_audience(data: &AudienceDto) -> Html {
    let ages = DemographicBreakdown::classify(&known_rows(&data.age_distribution));
    let genders = DemographicBreakdown::classify(&known_rows(&data.gender_distribution));
    let countries = ranked(known_rows(&data.geographic_distribution));
    let cities = ranked(known_rows(&data.city_distribution));

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            {render_breakdown("Age Distribution", &ages)}
            {render_breakdown("Gender Distribution", &genders)}
            <BarList title="Top Countries" rows={countries} />
            <BarList title="Top Cities" rows={cities} />
        </div>
    }
}

/// Draws a classified demographic list in the shape it was classified as
fn render_breakdown(title: &'static str, breakdown: &DemographicBreakdown) -> Html {
    match breakdown {
        DemographicBreakdown::Empty => html! { <BarList title={title} rows={Vec::new()} /> },
        DemographicBreakdown::AgeOnly(values) | DemographicBreakdown::Mixed(values) => {
            html! { <BarList title={title} rows={values.clone()} /> }
        }
        DemographicBreakdown::GenderOnly(values) => {
            let rows = values
                .iter()
                .map(|(gender, value)| LabeledValue::new(gender.label(), *value))
                .collect::<Vec<_>>();
            html! { <BarList title={title} rows={rows} /> }
        }
        DemographicBreakdown::AgeGender(rows) => {
            let genders = [Gender::Female, Gender::Male, Gender::Other];
            html! {
                <div class="bg-white rounded-lg shadow p-5">
                    <h3 class="text-sm font-semibold text-gray-700 mb-3">{title}</h3>
                    <table class="min-w-full text-sm">
                        <thead>
                            <tr>
                                <th class="text-left font-medium text-gray-500 py-1">{"Age"}</th>
                                {genders.iter().map(|gender| html! {
                                    <th class="text-right font-medium text-gray-500 py-1">{gender.label()}</th>
                                }).collect::<Html>()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {rows.iter().map(|row| html! {
                                <tr key={row.age.clone()}>
                                    <td class="py-1 text-gray-700">{&row.age}</td>
                                    {genders.iter().map(|gender| html! {
                                        <td class="py-1 text-right">{format_grouped(row.get(*gender).round() as u64)}</td>
                                    }).collect::<Html>()}
                                </tr>
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>
            }
        }
    }
}

fn render_traffic(data: &TrafficDto) -> Html {
    let channels = top_n(&data.acquisition_channels, |channel| channel.sessions as f64, TOP_LIMIT);
    let sources = top_n(&data.session_sources, |source| source.sessions as f64, TOP_LIMIT);

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow overflow-x-auto">
                <h3 class="px-4 pt-4 text-sm font-semibold text-gray-700">{"Acquisition Channels"}</h3>
                <table class="min-w-full divide-y divide-gray-200 text-sm mt-2">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{"Source"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"New Users"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"Sessions"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"Engagement"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"Conversions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {channels.iter().map(|channel| html! {
                            <tr key={channel.source.clone()}>
                                <td class="px-4 py-2 text-gray-700">{&channel.source}</td>
                                <td class="px-4 py-2 text-right">{format_grouped(channel.new_users)}</td>
                                <td class="px-4 py-2 text-right">{format_grouped(channel.sessions)}</td>
                                <td class="px-4 py-2 text-right">{display_metric(Some(channel.engagement_rate), 1, "%")}</td>
                                <td class="px-4 py-2 text-right">{display_metric(Some(channel.conversions), 0, "")}</td>
                            </tr>
                        }).collect::<Html>()}
                    </tbody>
                </table>
            </div>
            <BarList
                title="Top Session Sources"
                rows={sources.iter().map(|source| LabeledValue::new(source.source_medium.clone(), source.sessions as f64)).collect::<Vec<_>>()}
            />
        </div>
    }
}

fn render_devices(data: &TrafficDto) -> Html {
    let technology = &data.technology_breakdown;
    let devices = technology
        .devices
        .iter()
        .map(|device| LabeledValue::new(device.category.clone(), device.users as f64))
        .collect();
    let systems = technology
        .operating_systems
        .iter()
        .map(|os| LabeledValue::new(os.os.clone(), os.users as f64))
        .collect();

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <BarList title="Devices" rows={ranked(devices)} />
            <BarList title="Operating Systems" rows={ranked(systems)} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ranked_keeps_ten_largest() {
        let values: Vec<LabeledValue> = (1..=12)
            .map(|n| LabeledValue::new(format!("City {}", n), n as f64))
            .collect();
        let top = ranked(values);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].label, "City 12");
        assert_eq!(top[9].label, "City 3");
    }
}

use log::debug;
use serde_json::Value;
use shared::demographics::{instagram_age_breakdown, instagram_city_breakdown};
use shared::dto::reports::{AggregateReport, RunReportRequest};
use shared::format::{display_metric, format_date, format_grouped, COUNT_PLACEHOLDER};
use shared::{Ga4ReportType, MediaItem, Platform, SavedReport, YoutubeReportType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::reports::InstagramReportView;
use crate::api::{ApiResult, BrowserClient};
use crate::auth::AuthContext;
use crate::components::bar_list::BarList;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::loading::{render_pending, Loadable};
use crate::components::metric_card::MetricCard;

/// Posts listed in the recent media table
const RECENT_MEDIA_LIMIT: usize = 5;
const CAPTION_PREVIEW_CHARS: usize = 50;
/// Saved rows rendered before the table is cut off
const SAVED_ROW_LIMIT: usize = 25;

const PLATFORMS: [Platform; 3] = [Platform::Instagram, Platform::Ga4, Platform::Youtube];

#[function_component(ReportsTab)]
pub fn reports_tab() -> Html {
    let platform = use_state(|| Platform::Instagram);

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900">{"Reports"}</h2>
                <p class="mt-1 text-gray-600">{"Data pulled from your connected accounts"}</p>
            </div>
            <div class="border-b border-gray-200">
                <nav class="-mb-px flex space-x-8">
                    {PLATFORMS.iter().map(|tab| {
                        let tab = *tab;
                        let is_active = *platform == tab;
                        let platform = platform.clone();
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
                                onclick={Callback::from(move |_| platform.set(tab))}
                            >
                                {tab.display_name()}
                            </button>
                        }
                    }).collect::<Html>()}
                </nav>
            </div>
            {match *platform {
                Platform::Instagram => html! { <InstagramReportPanel /> },
                other => html! { <AggregateReportPanel key={other.slug()} platform={other} /> },
            }}
        </div>
    }
}

#[function_component(InstagramReportPanel)]
fn instagram_report_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let report = use_state(|| Loadable::<InstagramReportView>::Loading);

    {
        let report = report.clone();
        let on_expired = auth.session_expired.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = BrowserClient::browser().instagram_report().await;
                report.set(Loadable::settle(result, &on_expired));
            });
            || ()
        });
    }

    if let Some(pending) = render_pending(&report) {
        return pending;
    }
    let Loadable::Ready(view) = &*report else {
        return html! {};
    };

    let info = view.report.basic_info.clone().unwrap_or_default();
    let count = |value: Option<u64>| value.map(format_grouped).unwrap_or_else(|| COUNT_PLACEHOLDER.to_string());
    let posting_frequency = view
        .report
        .calculated_metrics
        .as_ref()
        .and_then(|metrics| metrics.posting_frequency);
    let recent: Vec<MediaItem> = view
        .report
        .media()
        .unwrap_or_default()
        .iter()
        .take(RECENT_MEDIA_LIMIT)
        .cloned()
        .collect();
    let demographics = view.report.demographics.clone().unwrap_or_default();
    let ages = demographics
        .follower_demographics_age
        .as_ref()
        .map(instagram_age_breakdown)
        .unwrap_or_default();
    let cities = demographics
        .follower_demographics_city
        .as_ref()
        .map(instagram_city_breakdown)
        .unwrap_or_default();
    let metrics = &view.metrics;

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-5 flex flex-wrap gap-8">
                <div>
                    <p class="text-sm text-gray-500">{"Account"}</p>
                    <p class="text-lg font-semibold">
                        {info.username.as_deref().map(|name| format!("@{}", name)).unwrap_or_else(|| COUNT_PLACEHOLDER.to_string())}
                    </p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">{"Followers"}</p>
                    <p class="text-lg font-semibold">{count(info.followers_count)}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">{"Following"}</p>
                    <p class="text-lg font-semibold">{count(info.follows_count)}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">{"Posts"}</p>
                    <p class="text-lg font-semibold">{count(info.media_count)}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">{"Posting Frequency"}</p>
                    <p class="text-lg font-semibold">{display_metric(posting_frequency, 2, " / day")}</p>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <MetricCard title="Engagement Rate" icon="💬" value={display_metric(metrics.engagement_rate, 2, "%")} />
                <MetricCard title="Audience Quality" icon="⭐" value={display_metric(metrics.audience_quality_score, 1, "")} subtitle="out of 100" />
                <MetricCard title="Comment / Like Ratio" icon="⚖️" value={display_metric(metrics.comment_like_ratio, 2, "")} />
                <MetricCard title="Avg Comment Length" icon="✍️" value={display_metric(metrics.avg_comment_length, 1, " chars")} />
            </div>

            <div class="bg-white rounded-lg shadow overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{"Post"}</th>
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{"Date"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"Likes"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"Comments"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"Reach"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        if recent.is_empty() {
                            <tr><td colspan="5" class="px-4 py-6 text-center text-gray-400">{"No posts found"}</td></tr>
                        }
                        {recent.iter().map(|media| html! {
                            <tr key={media.id.clone()}>
                                <td class="px-4 py-2 text-gray-700">{media.caption_preview(CAPTION_PREVIEW_CHARS)}</td>
                                <td class="px-4 py-2 text-gray-500">
                                    {media.posted_at().as_ref().map(format_date).unwrap_or_else(|| COUNT_PLACEHOLDER.to_string())}
                                </td>
                                <td class="px-4 py-2 text-right">{format_grouped(media.like_count)}</td>
                                <td class="px-4 py-2 text-right">{format_grouped(media.comments_count)}</td>
                                <td class="px-4 py-2 text-right">{format_grouped(media.reach())}</td>
                            </tr>
                        }).collect::<Html>()}
                    </tbody>
                </table>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <BarList title="Follower Age" rows={ages} />
                <BarList title="Top Cities" rows={cities} />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {view.report.insight_totals().into_iter().map(|(name, total)| html! {
                    <MetricCard key={name.clone()} title={name.clone()} value={format_grouped(total)} subtitle="last 28 days" />
                }).collect::<Html>()}
            </div>
        </div>
    }
}

/// `(key, label)` of every report the platform offers
fn report_types(platform: Platform) -> Vec<(&'static str, &'static str)> {
    match platform {
        Platform::Ga4 => Ga4ReportType::ALL.iter().map(|t| (t.key(), t.label())).collect(),
        Platform::Youtube => YoutubeReportType::ALL.iter().map(|t| (t.key(), t.label())).collect(),
        Platform::Instagram => Vec::new(),
    }
}

/// Column names of a saved report, taken from the first row
pub fn table_columns(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => COUNT_PLACEHOLDER.to_string(),
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => display_metric(Some(float), 2, ""),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct AggregateReportPanelProps {
    platform: Platform,
}

#[function_component(AggregateReportPanel)]
fn aggregate_report_panel(props: &AggregateReportPanelProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let selected = use_state(|| None::<&'static str>);
    let aggregate = use_state(|| None::<Loadable<AggregateReport>>);
    let saved = use_state(|| None::<Loadable<SavedReport>>);
    let platform = props.platform;

    let on_select = {
        let selected = selected.clone();
        let aggregate = aggregate.clone();
        let saved = saved.clone();
        let on_expired = auth.session_expired.clone();
        Callback::from(move |report_type: &'static str| {
            selected.set(Some(report_type));
            aggregate.set(Some(Loadable::Loading));
            saved.set(None);

            let aggregate = aggregate.clone();
            let saved = saved.clone();
            let on_expired = on_expired.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let client = BrowserClient::browser();
                let request = RunReportRequest {
                    report_type: report_type.to_string(),
                };
                let result = client.run_report(platform, &request).await;
                let ran = result.is_ok();
                aggregate.set(Some(Loadable::settle(result, &on_expired)));
                if !ran {
                    return;
                }

                debug!("Loading saved {} rows", report_type);
                saved.set(Some(Loadable::Loading));
                let rows = client.saved_report(platform, report_type).await;
                if let ApiResult::Ok(report) = &rows {
                    toast.show(Toast::info(format!("Loaded {} records", report.record_count())));
                }
                saved.set(Some(Loadable::settle(rows, &on_expired)));
            });
        })
    };

    let busy = (*aggregate).as_ref().map(Loadable::is_loading).unwrap_or(false);

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap gap-2">
                {report_types(platform).into_iter().map(|(key, label)| {
                    let on_select = on_select.clone();
                    let active = *selected == Some(key);
                    html! {
                        <button
                            key={key}
                            disabled={busy}
                            class={classes!(
                                "px-3", "py-1.5", "rounded-full", "text-sm", "border", "disabled:opacity-50",
                                if active {
                                    classes!("bg-orange-500", "border-orange-500", "text-white")
                                } else {
                                    classes!("bg-white", "border-gray-300", "text-gray-700", "hover:border-orange-400")
                                }
                            )}
                            onclick={Callback::from(move |_| on_select.emit(key))}
                        >
                            {label}
                        </button>
                    }
                }).collect::<Html>()}
            </div>

            {match &*aggregate {
                None => html! {
                    <p class="text-sm text-gray-500">
                        {format!("Pick a report to pull fresh {} data.", platform.display_name())}
                    </p>
                },
                Some(state) => render_pending(state).unwrap_or_else(|| match state {
                    Loadable::Ready(totals) => html! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            {totals.iter().map(|(name, value)| html! {
                                <MetricCard key={name.clone()} title={name.clone()} value={cell_text(value)} />
                            }).collect::<Html>()}
                        </div>
                    },
                    _ => html! {},
                }),
            }}

            {match &*saved {
                None => html! {},
                Some(state) => render_pending(state).unwrap_or_else(|| match state {
                    Loadable::Ready(report) => render_saved_rows(report),
                    _ => html! {},
                }),
            }}
        </div>
    }
}

fn render_saved_rows(report: &SavedReport) -> Html {
    let columns = table_columns(&report.data);

    html! {
        <div class="bg-white rounded-lg shadow overflow-x-auto">
            <p class="px-4 py-2 text-xs text-gray-500">{format!("{} records", report.record_count())}</p>
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead class="bg-gray-50">
                    <tr>
                        {columns.iter().map(|column| html! {
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{column}</th>
                        }).collect::<Html>()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    {report.data.iter().take(SAVED_ROW_LIMIT).map(|row| html! {
                        <tr>
                            {columns.iter().map(|column| html! {
                                <td class="px-4 py-2 text-gray-700">{cell_text(row.get(column).unwrap_or(&Value::Null))}</td>
                            }).collect::<Html>()}
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}

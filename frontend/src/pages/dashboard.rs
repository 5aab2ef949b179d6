use log::{info, warn};
use yew::prelude::*;

use crate::components::common_toast::{Toast, ToastContext};
use crate::components::dashboard::analytics_tab::AnalyticsTab;
use crate::components::dashboard::connections_tab::ConnectionsTab;
use crate::components::dashboard::overview_tab::OverviewTab;
use crate::components::dashboard::reports_tab::ReportsTab;
use crate::components::sidebar::Sidebar;
use crate::oauth::{clear_query, current_query, OAuthCallback};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Reports,
    Analyses,
    Connections,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Reports,
        DashboardTab::Analyses,
        DashboardTab::Connections,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Reports => "Reports",
            DashboardTab::Analyses => "Analyses",
            DashboardTab::Connections => "Connections",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "📊",
            DashboardTab::Reports => "📄",
            DashboardTab::Analyses => "📈",
            DashboardTab::Connections => "🔗",
        }
    }
}

/// Tab to open on arrival; provider redirects land on connections
pub fn initial_tab(callback: Option<&OAuthCallback>) -> DashboardTab {
    match callback {
        Some(_) => DashboardTab::Connections,
        None => DashboardTab::Overview,
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let callback = use_memo((), |_| OAuthCallback::from_query(&current_query()));
    let tab = use_state(|| initial_tab(callback.as_ref().as_ref()));
    let refresh = use_state(|| 0u32);

    {
        let callback = callback.clone();
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            if let Some(result) = callback.as_ref() {
                match result {
                    OAuthCallback::Connected(platform) => {
                        info!("{} connected", platform.display_name());
                        toast.show(Toast::success(result.message()));
                    }
                    OAuthCallback::Failed(reason) => {
                        warn!("Provider authorization failed: {}", reason);
                        toast.show(Toast::error(result.message()));
                    }
                }
                clear_query();
                refresh.set(*refresh + 1);
            }
            || ()
        });
    }

    let on_tab_click = {
        let tab = tab.clone();
        Callback::from(move |selected: DashboardTab| tab.set(selected))
    };

    html! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar current_tab={Some(*tab)} on_tab_click={Some(on_tab_click)} />
            <main class="flex-1 p-8 overflow-y-auto">
                {match *tab {
                    DashboardTab::Overview => html! { <OverviewTab /> },
                    DashboardTab::Reports => html! { <ReportsTab /> },
                    DashboardTab::Analyses => html! { <AnalyticsTab /> },
                    DashboardTab::Connections => html! { <ConnectionsTab refresh={*refresh} /> },
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Platform;

    #[test]
    fn test_provider_redirect_opens_connections() {
        let connected = OAuthCallback::Connected(Platform::Youtube);
        assert_eq!(initial_tab(Some(&connected)), DashboardTab::Connections);
        assert_eq!(initial_tab(None), DashboardTab::Overview);
    }

}

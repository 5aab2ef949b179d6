use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::pages::dashboard::DashboardTab;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// `None` outside the dashboard, e.g. on the settings page
    #[prop_or_default]
    pub current_tab: Option<DashboardTab>,
    #[prop_or_default]
    pub on_tab_click: Option<Callback<DashboardTab>>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();
    let current_route = use_route::<Route>();

    let on_logout_click = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CompanyLogin);
            }
        })
    };

    let item_classes = |active: bool| {
        classes!(
            "w-full", "flex", "items-center", "px-4", "py-2", "rounded-md", "text-sm", "font-medium",
            "transition-colors", "duration-200",
            if active {
                classes!("bg-orange-500", "text-white")
            } else {
                classes!("text-gray-300", "hover:bg-white/10", "hover:text-white")
            }
        )
    };

    html! {
        <aside class="w-64 min-h-screen bg-slate-900 text-white flex flex-col">
            <div class="px-6 py-5 border-b border-white/10">
                <span class="text-xl font-semibold">{"Infofluencer"}</span>
                if let Some(name) = auth.state.display_name() {
                    <p class="mt-1 text-xs text-gray-400 truncate">{name}</p>
                }
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                {DashboardTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let active = props.current_tab == Some(tab);
                    match &props.on_tab_click {
                        Some(on_tab_click) => {
                            let on_tab_click = on_tab_click.clone();
                            html! {
                                <button class={item_classes(active)} onclick={Callback::from(move |_| on_tab_click.emit(tab))}>
                                    <span class="mr-3">{tab.icon()}</span>
                                    {tab.label()}
                                </button>
                            }
                        }
                        None => html! {
                            <Link<Route> to={Route::Dashboard} classes={item_classes(false)}>
                                <span class="mr-3">{tab.icon()}</span>
                                {tab.label()}
                            </Link<Route>>
                        },
                    }
                }).collect::<Html>()}
                <Link<Route> to={Route::Settings} classes={item_classes(current_route == Some(Route::Settings))}>
                    <span class="mr-3">{"⚙️"}</span>
                    {"Settings"}
                </Link<Route>>
            </nav>
            <div class="px-3 py-4 border-t border-white/10">
                <button class={item_classes(false)} onclick={on_logout_click} disabled={auth.state.loading}>
                    <span class="mr-3">{"↩"}</span>
                    {"Log out"}
                </button>
            </div>
        </aside>
    }
}

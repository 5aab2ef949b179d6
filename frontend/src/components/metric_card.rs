use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    /// Already formatted; unavailable metrics arrive as the placeholder
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow p-5 flex flex-col space-y-1">
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-gray-500">{&props.title}</span>
                if let Some(icon) = &props.icon {
                    <span class="text-lg">{icon}</span>
                }
            </div>
            <span class="text-2xl font-semibold text-gray-900">{&props.value}</span>
            if let Some(subtitle) = &props.subtitle {
                <span class="text-xs text-gray-400">{subtitle}</span>
            }
        </div>
    }
}

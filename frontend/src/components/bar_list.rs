use shared::demographics::LabeledValue;
use shared::format::format_compact;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarListProps {
    pub title: AttrValue,
    pub rows: Vec<LabeledValue>,
    #[prop_or(AttrValue::Static("No data available"))]
    pub empty_text: AttrValue,
}

/// Width of a bar relative to the largest value, in percent
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Horizontal bars drawn with plain divs
#[function_component(BarList)]
pub fn bar_list(props: &BarListProps) -> Html {
    let max = props.rows.iter().map(|row| row.value).fold(0.0, f64::max);

    html! {
        <div class="bg-white rounded-lg shadow p-5">
            <h3 class="text-sm font-semibold text-gray-700 mb-3">{&props.title}</h3>
            if props.rows.is_empty() {
                <p class="text-sm text-gray-400">{&props.empty_text}</p>
            } else {
                <ul class="space-y-2">
                    {props.rows.iter().map(|row| {
                        let style = format!("width: {:.1}%", bar_width(row.value, max));
                        html! {
                            <li key={row.label.clone()}>
                                <div class="flex justify-between text-xs text-gray-600 mb-1">
                                    <span>{&row.label}</span>
                                    <span>{format_compact(Some(row.value))}</span>
                                </div>
                                <div class="h-2 bg-gray-100 rounded">
                                    <div class="h-2 bg-orange-500 rounded" style={style}></div>
                                </div>
                            </li>
                        }
                    }).collect::<Html>()}
                </ul>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(200.0, 200.0), 100.0);
        assert_eq!(bar_width(3.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }
}

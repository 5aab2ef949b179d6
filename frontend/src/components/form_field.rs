use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(true)]
    pub required: bool,
    /// Extra classes for the input, e.g. a validity border
    #[prop_or_default]
    pub input_class: Classes,
}

/// Labelled input that reports its value on every keystroke
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_value = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_value.emit(input.value());
        })
    };

    html! {
        <div>
            <label for={props.name.clone()} class="block text-sm font-semibold text-gray-700 mb-2">{&props.label}</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                disabled={props.disabled}
                class={classes!(
                    "w-full", "px-4", "py-3", "border", "rounded-xl", "focus:outline-none", "focus:ring-2",
                    "focus:ring-orange-400", "focus:border-transparent", "disabled:opacity-50",
                    if props.input_class.is_empty() { classes!("border-gray-200") } else { classes!() },
                    props.input_class.clone()
                )}
                oninput={oninput}
            />
        </div>
    }
}

/// Setter callback for a string state, for `FormField::oninput`
pub fn bind(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}

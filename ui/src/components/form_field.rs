use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn input_classes(has_error: bool) -> Classes {
    classes!(
        "w-full",
        "px-3",
        "py-2",
        "text-sm",
        "border",
        "rounded-md",
        "bg-white",
        "dark:bg-neutral-700",
        "text-neutral-900",
        "dark:text-neutral-100",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-amber-500",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed",
        if has_error {
            "border-red-500"
        } else {
            "border-neutral-300 dark:border-neutral-600"
        }
    )
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labeled text input with an inline, field-scoped error message.
#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">
                {&props.label}
            </label>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                class={input_classes(props.error.is_some())}
            />
            if let Some(error) = &props.error {
                <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    /// Currently selected option value.
    pub value: AttrValue,
    /// (value, label) pairs, rendered in order.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labeled select with an inline, field-scoped error message.
#[function_component]
pub fn SelectField(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">
                {&props.label}
            </label>
            <select
                {onchange}
                disabled={props.disabled}
                class={input_classes(props.error.is_some())}
            >
                {props.options.iter().map(|(value, label)| {
                    html! {
                        <option
                            value={value.clone()}
                            selected={*value == props.value}
                        >
                            {label}
                        </option>
                    }
                }).collect::<Html>()}
            </select>
            if let Some(error) = &props.error {
                <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}

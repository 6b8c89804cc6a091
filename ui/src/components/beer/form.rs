use payloads::{
    BeerId, BeerStyle,
    requests::{self, BeerValidation, validate_beer},
};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::components::{SelectField, TextField};
use crate::get_api_client;
use crate::hooks::use_beer;

#[derive(Properties, PartialEq)]
pub struct BeerFormProps {
    /// `Some` selects edit mode; `None` starts a blank create form.
    #[prop_or_default]
    pub beer_id: Option<BeerId>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn BeerForm(props: &BeerFormProps) -> Html {
    let is_edit = props.beer_id.is_some();
    let beer_hook = use_beer(props.beer_id);

    let beer_name = use_state(String::new);
    let beer_style = use_state(|| None::<BeerStyle>);
    let upc = use_state(String::new);
    let price = use_state(String::new);
    let quantity = use_state(String::new);
    let errors = use_state(BeerValidation::default);
    let is_saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    // Populate the fields once the existing beer loads in edit mode.
    {
        let beer_name = beer_name.clone();
        let beer_style = beer_style.clone();
        let upc = upc.clone();
        let price = price.clone();
        let quantity = quantity.clone();

        use_effect_with(beer_hook.beer.clone(), move |beer| {
            if let Some(beer) = beer {
                beer_name.set(beer.beer_name.clone());
                beer_style.set(Some(beer.beer_style));
                upc.set(beer.upc.clone());
                price.set(beer.price.to_string());
                quantity.set(beer.quantity_on_hand.to_string());
            }
        });
    }

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    if is_edit && beer_hook.is_loading && beer_hook.beer.is_none() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading beer..."}</p>
            </div>
        };
    }

    if is_edit
        && beer_hook.beer.is_none()
        && let Some(error) = &beer_hook.error
    {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading beer: {}", error)}
                </p>
                <button
                    onclick={on_cancel_click}
                    class="mt-4 px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"Back"}
                </button>
            </div>
        };
    }

    // Editing a field clears that field's validation error.
    let on_name_change = {
        let beer_name = beer_name.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            beer_name.set(value);
            if errors.beer_name.is_some() {
                errors.set(BeerValidation {
                    beer_name: None,
                    ..(*errors).clone()
                });
            }
        })
    };

    let on_style_change = {
        let beer_style = beer_style.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            beer_style.set(BeerStyle::from_wire(&value));
            if errors.beer_style.is_some() {
                errors.set(BeerValidation {
                    beer_style: None,
                    ..(*errors).clone()
                });
            }
        })
    };

    let on_upc_change = {
        let upc = upc.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            upc.set(value);
            if errors.upc.is_some() {
                errors.set(BeerValidation {
                    upc: None,
                    ..(*errors).clone()
                });
            }
        })
    };

    let on_price_change = {
        let price = price.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            price.set(value);
            if errors.price.is_some() {
                errors.set(BeerValidation {
                    price: None,
                    ..(*errors).clone()
                });
            }
        })
    };

    let on_quantity_change = {
        let quantity = quantity.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            quantity.set(value);
            if errors.quantity_on_hand.is_some() {
                errors.set(BeerValidation {
                    quantity_on_hand: None,
                    ..(*errors).clone()
                });
            }
        })
    };

    let on_submit = {
        let beer_name = beer_name.clone();
        let beer_style = beer_style.clone();
        let upc = upc.clone();
        let price = price.clone();
        let quantity = quantity.clone();
        let errors = errors.clone();
        let is_saving = is_saving.clone();
        let save_error = save_error.clone();
        let patch = beer_hook.patch.clone();
        let on_save = props.on_save.clone();
        let beer_id = props.beer_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let price_value = price.trim().parse::<Decimal>().ok();
            let quantity_value = quantity.trim().parse::<i32>().ok();

            let validation = validate_beer(
                &beer_name,
                *beer_style,
                &upc,
                price_value,
                quantity_value,
            );
            if !validation.is_valid() {
                errors.set(validation);
                return;
            }
            errors.set(BeerValidation::default());

            // All present: validation just confirmed it.
            let (Some(style), Some(price_value), Some(quantity_value)) =
                (*beer_style, price_value, quantity_value)
            else {
                return;
            };

            is_saving.set(true);
            save_error.set(None);

            if beer_id.is_some() {
                let body = requests::BeerPatch {
                    beer_name: Some(beer_name.trim().to_string()),
                    beer_style: Some(style),
                    upc: Some(upc.trim().to_string()),
                    price: Some(price_value),
                    quantity_on_hand: Some(quantity_value),
                };
                let is_saving = is_saving.clone();
                let on_save = on_save.clone();
                patch.emit((
                    body,
                    Callback::from(move |succeeded: bool| {
                        is_saving.set(false);
                        if succeeded {
                            on_save.emit(());
                        }
                    }),
                ));
            } else {
                let body = requests::NewBeer {
                    beer_name: beer_name.trim().to_string(),
                    beer_style: style,
                    upc: upc.trim().to_string(),
                    price: price_value,
                    quantity_on_hand: quantity_value,
                };
                let is_saving = is_saving.clone();
                let save_error = save_error.clone();
                let on_save = on_save.clone();
                yew::platform::spawn_local(async move {
                    match get_api_client().create_beer(&body).await {
                        Ok(_) => {
                            is_saving.set(false);
                            on_save.emit(());
                        }
                        Err(e) => {
                            save_error.set(Some(e.to_string()));
                            is_saving.set(false);
                        }
                    }
                });
            }
        })
    };

    let style_options: Vec<(AttrValue, AttrValue)> =
        std::iter::once((AttrValue::Static(""), AttrValue::Static("Select a style")))
            .chain(BeerStyle::ALL.into_iter().map(|style| {
                (
                    AttrValue::Static(style.wire_name()),
                    AttrValue::Static(style.label()),
                )
            }))
            .collect();

    // Save failures from the hook (edit) or the create call.
    let save_error_text = (*save_error)
        .clone()
        .or_else(|| if is_edit { beer_hook.error.clone() } else { None });

    html! {
        <div class="max-w-lg">
            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100 mb-6">
                {if is_edit { "Edit Beer" } else { "Create New Beer" }}
            </h2>

            <form onsubmit={on_submit} class="space-y-4">
                if let Some(error) = save_error_text {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-sm text-red-700 dark:text-red-400">
                        {error}
                    </div>
                }

                <TextField
                    label="Beer Name"
                    value={(*beer_name).clone()}
                    on_change={on_name_change}
                    error={errors.beer_name.map(AttrValue::Static)}
                />
                <SelectField
                    label="Beer Style"
                    value={(*beer_style).map(|s| s.wire_name()).unwrap_or("")}
                    options={style_options}
                    on_change={on_style_change}
                    error={errors.beer_style.map(AttrValue::Static)}
                />
                <TextField
                    label="UPC"
                    value={(*upc).clone()}
                    on_change={on_upc_change}
                    error={errors.upc.map(AttrValue::Static)}
                />
                <TextField
                    label="Price"
                    input_type="number"
                    value={(*price).clone()}
                    on_change={on_price_change}
                    error={errors.price.map(AttrValue::Static)}
                />
                <TextField
                    label="Quantity On Hand"
                    input_type="number"
                    value={(*quantity).clone()}
                    on_change={on_quantity_change}
                    error={errors.quantity_on_hand.map(AttrValue::Static)}
                />

                <div class="flex justify-between pt-2">
                    <button
                        type="button"
                        onclick={on_cancel_click}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={*is_saving}
                        class="px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {if *is_saving { "Saving..." } else { "Save Beer" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

use payloads::{
    BeerFilter, BeerId, CustomerFilter, CustomerId,
    requests::{self, OrderValidation, validate_new_order},
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{use_beers, use_customers};

#[derive(Properties, PartialEq)]
pub struct OrderFormProps {
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// One editable order line row before submission.
#[derive(Clone, PartialEq)]
struct LineInput {
    beer_id: Option<BeerId>,
    quantity: String,
}

impl Default for LineInput {
    fn default() -> Self {
        Self {
            beer_id: None,
            quantity: "1".to_string(),
        }
    }
}

// Dropdown data uses an oversized page rather than a second paging UI
// inside the form.
fn picker_filter_size() -> u32 {
    100
}

#[function_component]
pub fn OrderForm(props: &OrderFormProps) -> Html {
    let customers = use_customers(CustomerFilter {
        size: picker_filter_size(),
        ..CustomerFilter::default()
    });
    let beers = use_beers(BeerFilter {
        size: picker_filter_size(),
        ..BeerFilter::default()
    });

    let customer_id = use_state(|| None::<CustomerId>);
    let lines = use_state(|| vec![LineInput::default()]);
    let errors = use_state(OrderValidation::default);
    let is_saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_customer_change = {
        let customer_id = customer_id.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            customer_id.set(select.value().parse::<i64>().ok().map(CustomerId));
            let mut next = (*errors).clone();
            next.customer = None;
            errors.set(next);
        })
    };

    let on_add_line = {
        let lines = lines.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*lines).clone();
            next.push(LineInput::default());
            lines.set(next);
        })
    };

    let on_submit = {
        let customer_id = customer_id.clone();
        let lines = lines.clone();
        let errors = errors.clone();
        let is_saving = is_saving.clone();
        let save_error = save_error.clone();
        let on_save = props.on_save.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if lines.iter().any(|line| line.beer_id.is_none()) {
                errors.set(OrderValidation {
                    customer: if customer_id.is_none() {
                        Some("A customer is required")
                    } else {
                        None
                    },
                    order_lines: Some("Every order line needs a beer"),
                });
                return;
            }

            let order_lines: Vec<requests::NewOrderLine> = lines
                .iter()
                .filter_map(|line| {
                    line.beer_id.map(|beer_id| requests::NewOrderLine {
                        beer_id,
                        order_quantity: line.quantity.trim().parse().unwrap_or(0),
                    })
                })
                .collect();

            let validation = validate_new_order(*customer_id, &order_lines);
            if !validation.is_valid() {
                errors.set(validation);
                return;
            }
            errors.set(OrderValidation::default());

            let Some(customer_id) = *customer_id else {
                return;
            };
            let body = requests::CreateBeerOrder {
                customer_id,
                order_lines,
            };

            is_saving.set(true);
            save_error.set(None);
            let is_saving = is_saving.clone();
            let save_error = save_error.clone();
            let on_save = on_save.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().create_beer_order(&body).await {
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
        })
    };

    let picker_error = customers.error.as_ref().or(beers.error.as_ref());
    if let Some(error) = picker_error {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading form data: {}", error)}
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

    if customers.is_initial_loading() || beers.is_initial_loading() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading form data..."}</p>
            </div>
        };
    }

    let customer_options = customers
        .page
        .as_ref()
        .map(|page| page.content.as_slice())
        .unwrap_or_default();
    let beer_options = beers
        .page
        .as_ref()
        .map(|page| page.content.as_slice())
        .unwrap_or_default();

    let line_rows = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let on_beer_change = {
                let lines = lines.clone();
                let errors = errors.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let mut next = (*lines).clone();
                    next[index].beer_id = select.value().parse::<i64>().ok().map(BeerId);
                    lines.set(next);
                    let mut next_errors = (*errors).clone();
                    next_errors.order_lines = None;
                    errors.set(next_errors);
                })
            };

            let on_quantity_input = {
                let lines = lines.clone();
                let errors = errors.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*lines).clone();
                    next[index].quantity = input.value();
                    lines.set(next);
                    let mut next_errors = (*errors).clone();
                    next_errors.order_lines = None;
                    errors.set(next_errors);
                })
            };

            let on_remove = {
                let lines = lines.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*lines).clone();
                    next.remove(index);
                    lines.set(next);
                })
            };

            html! {
                <div key={index} class="flex gap-4 items-start">
                    <select
                        onchange={on_beer_change}
                        class="flex-1 px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                    >
                        <option value="" selected={line.beer_id.is_none()}>
                            {"Select a beer"}
                        </option>
                        {beer_options.iter().map(|beer| {
                            html! {
                                <option
                                    value={beer.id.to_string()}
                                    selected={line.beer_id == Some(beer.id)}
                                >
                                    {format!("{} ({})", beer.beer_name, beer.beer_style.label())}
                                </option>
                            }
                        }).collect::<Html>()}
                    </select>
                    <input
                        type="number"
                        min="1"
                        value={line.quantity.clone()}
                        oninput={on_quantity_input}
                        class="w-24 px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                    />
                    <button
                        type="button"
                        onclick={on_remove}
                        disabled={lines.len() == 1}
                        class="px-3 py-2 text-sm font-medium text-red-600 dark:text-red-400 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {"Remove"}
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="max-w-2xl">
            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Create New Order"}
            </h2>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = (*save_error).clone() {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-sm text-red-700 dark:text-red-400">
                        {error}
                    </div>
                }

                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                        {"Customer"}
                    </label>
                    <select
                        onchange={on_customer_change}
                        class="w-full px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                    >
                        <option value="" selected={customer_id.is_none()}>
                            {"Select a customer"}
                        </option>
                        {customer_options.iter().map(|customer| {
                            html! {
                                <option
                                    value={customer.id.to_string()}
                                    selected={*customer_id == Some(customer.id)}
                                >
                                    {&customer.customer_name}
                                </option>
                            }
                        }).collect::<Html>()}
                    </select>
                    if let Some(error) = errors.customer {
                        <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                </div>

                <div>
                    <div class="flex justify-between items-center mb-2">
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">
                            {"Order Lines"}
                        </label>
                        <button
                            type="button"
                            onclick={on_add_line}
                            class="px-3 py-1 text-xs font-medium border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                        >
                            {"Add Line"}
                        </button>
                    </div>
                    <div class="space-y-3">
                        {line_rows}
                    </div>
                    if let Some(error) = errors.order_lines {
                        <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                </div>

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
                        {if *is_saving { "Placing Order..." } else { "Place Order" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

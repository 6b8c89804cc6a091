use payloads::{BeerOrderFilter, BeerOrderFilterUpdate, BeerOrderId, CustomerId, OrderStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::Pagination;
use crate::components::order::StatusBadge;
use crate::hooks::use_beer_orders;
use crate::utils::time::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct OrderListProps {
    pub on_view: Callback<BeerOrderId>,
    pub on_create: Callback<()>,
}

#[function_component]
pub fn OrderList(props: &OrderListProps) -> Html {
    // Filter inputs are local until Search commits them to the hook filter.
    let customer_id_input = use_state(String::new);
    let status_input = use_state(|| None::<OrderStatus>);
    let orders = use_beer_orders(BeerOrderFilter::default());

    let on_customer_id_input = {
        let customer_id_input = customer_id_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            customer_id_input.set(input.value());
        })
    };

    let on_status_change = {
        let status_input = status_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status_input.set(OrderStatus::from_wire(&select.value()));
        })
    };

    let on_search = {
        let customer_id_input = customer_id_input.clone();
        let status_input = status_input.clone();
        let update_filter = orders.update_filter.clone();
        Callback::from(move |_: MouseEvent| {
            let customer_id = customer_id_input.trim().parse::<i64>().ok().map(CustomerId);
            update_filter.emit(BeerOrderFilterUpdate {
                customer_id: Some(customer_id),
                order_status: Some(*status_input),
                ..BeerOrderFilterUpdate::default()
            });
        })
    };

    let on_clear = {
        let customer_id_input = customer_id_input.clone();
        let status_input = status_input.clone();
        let update_filter = orders.update_filter.clone();
        Callback::from(move |_: MouseEvent| {
            customer_id_input.set(String::new());
            status_input.set(None);
            update_filter.emit(BeerOrderFilterUpdate {
                customer_id: Some(None),
                order_status: Some(None),
                ..BeerOrderFilterUpdate::default()
            });
        })
    };

    let current_page = orders.filter.page;
    let on_previous = {
        let update_filter = orders.update_filter.clone();
        Callback::from(move |_| {
            update_filter.emit(BeerOrderFilterUpdate::page(current_page.saturating_sub(1)));
        })
    };
    let on_next = {
        let update_filter = orders.update_filter.clone();
        Callback::from(move |_| {
            update_filter.emit(BeerOrderFilterUpdate::page(current_page + 1));
        })
    };

    let on_create = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };

    if let Some(error) = &orders.error {
        let on_retry = {
            let refetch = orders.refetch.clone();
            Callback::from(move |_: MouseEvent| refetch.emit(()))
        };
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading orders: {}", error)}
                </p>
                <button
                    onclick={on_retry}
                    class="mt-4 px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"Retry"}
                </button>
            </div>
        };
    }

    html! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Beer Orders"}
                </h2>
                <button
                    onclick={on_create}
                    class="px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"New Order"}
                </button>
            </div>

            <div class="flex flex-col md:flex-row gap-4 mb-6">
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Filter by customer ID"
                    value={(*customer_id_input).clone()}
                    oninput={on_customer_id_input}
                    class="flex-1 px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                />
                <select
                    onchange={on_status_change}
                    class="flex-1 px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                >
                    <option value="ALL" selected={status_input.is_none()}>{"All Statuses"}</option>
                    {OrderStatus::ALL.into_iter().map(|status| {
                        html! {
                            <option
                                value={status.wire_name()}
                                selected={*status_input == Some(status)}
                            >
                                {status.label()}
                            </option>
                        }
                    }).collect::<Html>()}
                </select>
                <button
                    onclick={on_search}
                    class="px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"Search"}
                </button>
                <button
                    onclick={on_clear}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                >
                    {"Clear"}
                </button>
            </div>

            if orders.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading orders..."}</p>
                </div>
            } else if let Some(page) = &orders.page {
                if page.content.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">{"No orders found"}</p>
                    </div>
                } else {
                    <table class="w-full text-left text-sm">
                        <thead>
                            <tr class="border-b border-neutral-200 dark:border-neutral-700 text-neutral-500 dark:text-neutral-400">
                                <th class="py-2 pr-4 font-medium">{"Order"}</th>
                                <th class="py-2 pr-4 font-medium">{"Customer"}</th>
                                <th class="py-2 pr-4 font-medium">{"Status"}</th>
                                <th class="py-2 pr-4 font-medium">{"Lines"}</th>
                                <th class="py-2 pr-4 font-medium">{"Created"}</th>
                                <th class="py-2 font-medium">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page.content.iter().map(|order| {
                                let on_view = {
                                    let on_view = props.on_view.clone();
                                    let id = order.id;
                                    Callback::from(move |_: MouseEvent| on_view.emit(id))
                                };
                                html! {
                                    <tr key={order.id.0} class="border-b border-neutral-100 dark:border-neutral-800">
                                        <td class="py-2 pr-4">{format!("#{}", order.id)}</td>
                                        <td class="py-2 pr-4">{&order.customer.customer_name}</td>
                                        <td class="py-2 pr-4">
                                            <StatusBadge status={order.order_status} />
                                        </td>
                                        <td class="py-2 pr-4">{order.order_lines.len()}</td>
                                        <td class="py-2 pr-4">{format_timestamp(order.created_date)}</td>
                                        <td class="py-2">
                                            <button
                                                onclick={on_view}
                                                class="px-3 py-1 text-xs font-medium border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                                            >
                                                {"View"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                    <Pagination
                        first={page.first}
                        last={page.last}
                        range={page.display_range()}
                        noun="orders"
                        on_previous={on_previous}
                        on_next={on_next}
                    />
                }
            }
        </div>
    }
}

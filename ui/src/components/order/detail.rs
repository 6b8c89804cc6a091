use payloads::BeerOrderId;
use yew::prelude::*;

use crate::components::ConfirmationModal;
use crate::components::order::StatusBadge;
use crate::hooks::use_beer_order;
use crate::utils::{format_price, time::format_timestamp};

#[derive(Properties, PartialEq)]
pub struct OrderDetailProps {
    pub order_id: BeerOrderId,
    pub on_back: Callback<()>,
}

/// Which destructive action the open confirmation modal is guarding.
#[derive(Clone, Copy, PartialEq)]
enum PendingAction {
    Cancel,
    Delete,
}

#[function_component]
pub fn OrderDetail(props: &OrderDetailProps) -> Html {
    let order_hook = use_beer_order(Some(props.order_id));
    let pending_action = use_state(|| None::<PendingAction>);

    let on_back_click = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    if order_hook.is_loading && order_hook.order.is_none() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading order details..."}</p>
            </div>
        };
    }

    if let Some(error) = &order_hook.error
        && order_hook.order.is_none()
    {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading order: {}", error)}
                </p>
                <button
                    onclick={on_back_click}
                    class="mt-4 px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"Back to List"}
                </button>
            </div>
        };
    }

    let Some(order) = &order_hook.order else {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"The requested order could not be found."}
                </p>
                <button
                    onclick={on_back_click}
                    class="mt-4 px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"Back to List"}
                </button>
            </div>
        };
    };

    let next_status = order.order_status.next();

    let on_advance = next_status.map(|status| {
        let update_status = order_hook.update_status.clone();
        Callback::from(move |_: MouseEvent| {
            update_status.emit((status, Callback::noop()));
        })
    });

    let on_cancel_click = {
        let pending_action = pending_action.clone();
        Callback::from(move |_: MouseEvent| pending_action.set(Some(PendingAction::Cancel)))
    };

    let on_delete_click = {
        let pending_action = pending_action.clone();
        Callback::from(move |_: MouseEvent| pending_action.set(Some(PendingAction::Delete)))
    };

    let on_confirm_cancel = {
        let cancel = order_hook.cancel.clone();
        let pending_action = pending_action.clone();
        Callback::from(move |_| {
            let pending_action = pending_action.clone();
            cancel.emit(Callback::from(move |succeeded: bool| {
                if succeeded {
                    pending_action.set(None);
                }
            }));
        })
    };

    let on_confirm_delete = {
        let delete = order_hook.delete.clone();
        let pending_action = pending_action.clone();
        let on_back = props.on_back.clone();
        Callback::from(move |_| {
            let pending_action = pending_action.clone();
            let on_back = on_back.clone();
            delete.emit(Callback::from(move |succeeded: bool| {
                if succeeded {
                    pending_action.set(None);
                    on_back.emit(());
                }
            }));
        })
    };

    let on_close_confirm = {
        let pending_action = pending_action.clone();
        Callback::from(move |_| pending_action.set(None))
    };

    let field = |label: &str, value: String| {
        html! {
            <div>
                <span class="font-medium text-neutral-900 dark:text-neutral-100">
                    {format!("{label}: ")}
                </span>
                <span class="text-neutral-700 dark:text-neutral-300">{value}</span>
            </div>
        }
    };

    html! {
        <div>
            <div class="flex items-center gap-3 mb-6">
                <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {format!("Order #{}", order.id)}
                </h2>
                <StatusBadge status={order.order_status} />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8">
                <div>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Customer"}
                    </h3>
                    <div class="space-y-2 text-sm">
                        {field("Name", order.customer.customer_name.clone())}
                        {field("Email", order.customer.email.clone())}
                        {field("Phone", order.customer.phone.clone())}
                    </div>
                </div>
                <div>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"System Information"}
                    </h3>
                    <div class="space-y-2 text-sm">
                        {field("ID", order.id.to_string())}
                        {field("Version", order.version.to_string())}
                        {field("Created", format_timestamp(order.created_date))}
                        {field("Last Updated", format_timestamp(order.update_date))}
                    </div>
                </div>
            </div>

            <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                {"Order Lines"}
            </h3>
            <table class="w-full text-left text-sm mb-8">
                <thead>
                    <tr class="border-b border-neutral-200 dark:border-neutral-700 text-neutral-500 dark:text-neutral-400">
                        <th class="py-2 pr-4 font-medium">{"Beer"}</th>
                        <th class="py-2 pr-4 font-medium">{"Style"}</th>
                        <th class="py-2 pr-4 font-medium">{"Price"}</th>
                        <th class="py-2 pr-4 font-medium">{"Requested"}</th>
                        <th class="py-2 font-medium">{"Allocated"}</th>
                    </tr>
                </thead>
                <tbody>
                    {order.order_lines.iter().map(|line| {
                        html! {
                            <tr key={line.id.0} class="border-b border-neutral-100 dark:border-neutral-800">
                                <td class="py-2 pr-4">{&line.beer.beer_name}</td>
                                <td class="py-2 pr-4">{line.beer.beer_style.label()}</td>
                                <td class="py-2 pr-4">{format_price(line.beer.price)}</td>
                                <td class="py-2 pr-4">{line.order_quantity}</td>
                                <td class="py-2">{line.quantity_allocated}</td>
                            </tr>
                        }
                    }).collect::<Html>()}
                </tbody>
            </table>

            if let Some(error) = &order_hook.error {
                <div class="p-3 mb-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-sm text-red-700 dark:text-red-400">
                    {error.clone()}
                </div>
            }

            <div class="flex justify-between">
                <button
                    onclick={on_back_click.clone()}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                >
                    {"Back to List"}
                </button>
                <div class="flex gap-2">
                    if let (Some(on_advance), Some(next_status)) = (on_advance, next_status) {
                        <button
                            onclick={on_advance}
                            disabled={order_hook.is_loading}
                            class="px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                        >
                            {format!("Mark as {}", next_status.label())}
                        </button>
                    }
                    if !order.order_status.is_terminal() {
                        <button
                            onclick={on_cancel_click}
                            class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                        >
                            {"Cancel Order"}
                        </button>
                    }
                    <button
                        onclick={on_delete_click}
                        class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-md transition-colors"
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>

            if *pending_action == Some(PendingAction::Cancel) {
                <ConfirmationModal
                    title="Cancel Order"
                    message={format!("This will cancel order #{}.", order.id)}
                    confirm_text="Cancel Order"
                    on_confirm={on_confirm_cancel}
                    on_close={on_close_confirm.clone()}
                    is_loading={order_hook.is_loading}
                    error_message={order_hook.error.clone().map(AttrValue::from)}
                />
            }
            if *pending_action == Some(PendingAction::Delete) {
                <ConfirmationModal
                    title="Delete Order"
                    message={format!("This will permanently delete order #{}.", order.id)}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_confirm}
                    is_loading={order_hook.is_loading}
                    error_message={order_hook.error.clone().map(AttrValue::from)}
                />
            }
        </div>
    }
}

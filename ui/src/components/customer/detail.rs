use payloads::CustomerId;
use yew::prelude::*;

use crate::components::ConfirmationModal;
use crate::hooks::use_customer;
use crate::utils::time::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct CustomerDetailProps {
    pub customer_id: CustomerId,
    pub on_back: Callback<()>,
    pub on_edit: Callback<CustomerId>,
}

#[function_component]
pub fn CustomerDetail(props: &CustomerDetailProps) -> Html {
    let customer_hook = use_customer(Some(props.customer_id));
    let show_delete_confirm = use_state(|| false);

    let on_back_click = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    if customer_hook.is_loading && customer_hook.customer.is_none() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading customer details..."}</p>
            </div>
        };
    }

    if let Some(error) = &customer_hook.error
        && customer_hook.customer.is_none()
    {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading customer: {}", error)}
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

    let Some(customer) = &customer_hook.customer else {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"The requested customer could not be found."}
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

    let on_edit_click = {
        let on_edit = props.on_edit.clone();
        let id = customer.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };

    let on_delete_click = {
        let show_delete_confirm = show_delete_confirm.clone();
        Callback::from(move |_: MouseEvent| show_delete_confirm.set(true))
    };

    let on_confirm_delete = {
        let delete = customer_hook.delete.clone();
        let show_delete_confirm = show_delete_confirm.clone();
        let on_back = props.on_back.clone();
        Callback::from(move |_| {
            let show_delete_confirm = show_delete_confirm.clone();
            let on_back = on_back.clone();
            delete.emit(Callback::from(move |succeeded: bool| {
                if succeeded {
                    show_delete_confirm.set(false);
                    on_back.emit(());
                }
            }));
        })
    };

    let on_close_confirm = {
        let show_delete_confirm = show_delete_confirm.clone();
        Callback::from(move |_| show_delete_confirm.set(false))
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
            <div class="mb-6">
                <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {&customer.customer_name}
                </h2>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">{"Customer Details"}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Contact Information"}
                    </h3>
                    <div class="space-y-2 text-sm">
                        {field("Email", customer.email.clone())}
                        {field("Phone", customer.phone.clone())}
                        {field("Address", customer.address.clone())}
                        {field("City", customer.city.clone())}
                        {field("State", customer.state.clone())}
                        {field("Zip Code", customer.zip_code.clone())}
                    </div>
                </div>
                <div>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"System Information"}
                    </h3>
                    <div class="space-y-2 text-sm">
                        {field("ID", customer.id.to_string())}
                        {field("Version", customer.version.to_string())}
                        {field("Created", format_timestamp(customer.created_date))}
                        {field("Last Updated", format_timestamp(customer.update_date))}
                    </div>
                </div>
            </div>

            <div class="flex justify-between mt-8">
                <button
                    onclick={on_back_click.clone()}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                >
                    {"Back to List"}
                </button>
                <div class="flex gap-2">
                    <button
                        onclick={on_edit_click}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                    >
                        {"Edit"}
                    </button>
                    <button
                        onclick={on_delete_click}
                        class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-md transition-colors"
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>

            if *show_delete_confirm {
                <ConfirmationModal
                    title="Delete Customer"
                    message={format!("This will permanently delete \"{}\".", customer.customer_name)}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_confirm}
                    is_loading={customer_hook.is_loading}
                    error_message={customer_hook.error.clone().map(AttrValue::from)}
                />
            }
        </div>
    }
}

use payloads::{CustomerFilter, CustomerFilterUpdate, CustomerId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Pagination;
use crate::hooks::use_customers;
use crate::utils::non_empty;

#[derive(Properties, PartialEq)]
pub struct CustomerListProps {
    pub on_view: Callback<CustomerId>,
    pub on_edit: Callback<CustomerId>,
    pub on_create: Callback<()>,
}

#[function_component]
pub fn CustomerList(props: &CustomerListProps) -> Html {
    let name_input = use_state(String::new);
    let customers = use_customers(CustomerFilter::default());

    let on_name_input = {
        let name_input = name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name_input.set(input.value());
        })
    };

    let on_search = {
        let name_input = name_input.clone();
        let update_filter = customers.update_filter.clone();
        Callback::from(move |_: MouseEvent| {
            update_filter.emit(CustomerFilterUpdate {
                customer_name: Some(non_empty(&name_input)),
                ..CustomerFilterUpdate::default()
            });
        })
    };

    let on_clear = {
        let name_input = name_input.clone();
        let update_filter = customers.update_filter.clone();
        Callback::from(move |_: MouseEvent| {
            name_input.set(String::new());
            update_filter.emit(CustomerFilterUpdate {
                customer_name: Some(None),
                ..CustomerFilterUpdate::default()
            });
        })
    };

    let current_page = customers.filter.page;
    let on_previous = {
        let update_filter = customers.update_filter.clone();
        Callback::from(move |_| {
            update_filter
                .emit(CustomerFilterUpdate::page(current_page.saturating_sub(1)));
        })
    };
    let on_next = {
        let update_filter = customers.update_filter.clone();
        Callback::from(move |_| {
            update_filter.emit(CustomerFilterUpdate::page(current_page + 1));
        })
    };

    let on_create = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };

    if let Some(error) = &customers.error {
        let on_retry = {
            let refetch = customers.refetch.clone();
            Callback::from(move |_: MouseEvent| refetch.emit(()))
        };
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading customers: {}", error)}
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
                    {"Customers"}
                </h2>
                <button
                    onclick={on_create}
                    class="px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
                >
                    {"Add New Customer"}
                </button>
            </div>

            <div class="flex flex-col md:flex-row gap-4 mb-6">
                <input
                    type="text"
                    placeholder="Filter by name"
                    value={(*name_input).clone()}
                    oninput={on_name_input}
                    class="flex-1 px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                />
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

            if customers.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading customers..."}</p>
                </div>
            } else if let Some(page) = &customers.page {
                if page.content.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">{"No customers found"}</p>
                    </div>
                } else {
                    <table class="w-full text-left text-sm">
                        <thead>
                            <tr class="border-b border-neutral-200 dark:border-neutral-700 text-neutral-500 dark:text-neutral-400">
                                <th class="py-2 pr-4 font-medium">{"Name"}</th>
                                <th class="py-2 pr-4 font-medium">{"Email"}</th>
                                <th class="py-2 pr-4 font-medium">{"Phone"}</th>
                                <th class="py-2 pr-4 font-medium">{"City"}</th>
                                <th class="py-2 font-medium">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page.content.iter().map(|customer| {
                                let on_view = {
                                    let on_view = props.on_view.clone();
                                    let id = customer.id;
                                    Callback::from(move |_: MouseEvent| on_view.emit(id))
                                };
                                let on_edit = {
                                    let on_edit = props.on_edit.clone();
                                    let id = customer.id;
                                    Callback::from(move |_: MouseEvent| on_edit.emit(id))
                                };
                                html! {
                                    <tr key={customer.id.0} class="border-b border-neutral-100 dark:border-neutral-800">
                                        <td class="py-2 pr-4">{&customer.customer_name}</td>
                                        <td class="py-2 pr-4">{&customer.email}</td>
                                        <td class="py-2 pr-4">{&customer.phone}</td>
                                        <td class="py-2 pr-4">{&customer.city}</td>
                                        <td class="py-2">
                                            <div class="flex gap-2">
                                                <button
                                                    onclick={on_view}
                                                    class="px-3 py-1 text-xs font-medium border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                                                >
                                                    {"View"}
                                                </button>
                                                <button
                                                    onclick={on_edit}
                                                    class="px-3 py-1 text-xs font-medium border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                                                >
                                                    {"Edit"}
                                                </button>
                                            </div>
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
                        noun="customers"
                        on_previous={on_previous}
                        on_next={on_next}
                    />
                }
            }
        </div>
    }
}

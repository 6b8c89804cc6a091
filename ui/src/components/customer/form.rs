use payloads::{
    CustomerId,
    requests::{self, CustomerValidation, validate_customer},
};
use yew::prelude::*;

use crate::components::TextField;
use crate::get_api_client;
use crate::hooks::use_customer;

#[derive(Properties, PartialEq)]
pub struct CustomerFormProps {
    /// `Some` selects edit mode; `None` starts a blank create form.
    #[prop_or_default]
    pub customer_id: Option<CustomerId>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

// Change handler that stores the input and clears the field's error.
fn change_handler(
    value_state: UseStateHandle<String>,
    errors: UseStateHandle<CustomerValidation>,
    clear: fn(&mut CustomerValidation),
) -> Callback<String> {
    Callback::from(move |value: String| {
        value_state.set(value);
        let mut next = (*errors).clone();
        clear(&mut next);
        errors.set(next);
    })
}

#[function_component]
pub fn CustomerForm(props: &CustomerFormProps) -> Html {
    let is_edit = props.customer_id.is_some();
    let customer_hook = use_customer(props.customer_id);

    let customer_name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let address = use_state(String::new);
    let city = use_state(String::new);
    let state = use_state(String::new);
    let zip_code = use_state(String::new);
    let errors = use_state(CustomerValidation::default);
    let is_saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    // Populate the fields once the existing customer loads in edit mode.
    {
        let customer_name = customer_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let address = address.clone();
        let city = city.clone();
        let state = state.clone();
        let zip_code = zip_code.clone();

        use_effect_with(customer_hook.customer.clone(), move |customer| {
            if let Some(customer) = customer {
                customer_name.set(customer.customer_name.clone());
                email.set(customer.email.clone());
                phone.set(customer.phone.clone());
                address.set(customer.address.clone());
                city.set(customer.city.clone());
                state.set(customer.state.clone());
                zip_code.set(customer.zip_code.clone());
            }
        });
    }

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    if is_edit && customer_hook.is_loading && customer_hook.customer.is_none() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading customer..."}</p>
            </div>
        };
    }

    if is_edit
        && customer_hook.customer.is_none()
        && let Some(error) = &customer_hook.error
    {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading customer: {}", error)}
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

    let on_name_change = change_handler(customer_name.clone(), errors.clone(), |e| {
        e.customer_name = None;
    });
    let on_email_change =
        change_handler(email.clone(), errors.clone(), |e| e.email = None);
    let on_phone_change =
        change_handler(phone.clone(), errors.clone(), |e| e.phone = None);
    let on_address_change =
        change_handler(address.clone(), errors.clone(), |e| e.address = None);
    let on_city_change =
        change_handler(city.clone(), errors.clone(), |e| e.city = None);
    let on_state_change =
        change_handler(state.clone(), errors.clone(), |e| e.state = None);
    let on_zip_change =
        change_handler(zip_code.clone(), errors.clone(), |e| e.zip_code = None);

    let on_submit = {
        let customer_name = customer_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let address = address.clone();
        let city = city.clone();
        let state = state.clone();
        let zip_code = zip_code.clone();
        let errors = errors.clone();
        let is_saving = is_saving.clone();
        let save_error = save_error.clone();
        let patch = customer_hook.patch.clone();
        let on_save = props.on_save.clone();
        let customer_id = props.customer_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate_customer(
                &customer_name,
                &email,
                &phone,
                &address,
                &city,
                &state,
                &zip_code,
            );
            if !validation.is_valid() {
                errors.set(validation);
                return;
            }
            errors.set(CustomerValidation::default());

            is_saving.set(true);
            save_error.set(None);

            if customer_id.is_some() {
                let body = requests::CustomerPatch {
                    customer_name: Some(customer_name.trim().to_string()),
                    email: Some(email.trim().to_string()),
                    phone: Some(phone.trim().to_string()),
                    address: Some(address.trim().to_string()),
                    city: Some(city.trim().to_string()),
                    state: Some(state.trim().to_string()),
                    zip_code: Some(zip_code.trim().to_string()),
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
                let body = requests::NewCustomer {
                    customer_name: customer_name.trim().to_string(),
                    email: email.trim().to_string(),
                    phone: phone.trim().to_string(),
                    address: address.trim().to_string(),
                    city: city.trim().to_string(),
                    state: state.trim().to_string(),
                    zip_code: zip_code.trim().to_string(),
                };
                let is_saving = is_saving.clone();
                let save_error = save_error.clone();
                let on_save = on_save.clone();
                yew::platform::spawn_local(async move {
                    match get_api_client().create_customer(&body).await {
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

    let save_error_text = (*save_error).clone().or_else(|| {
        if is_edit {
            customer_hook.error.clone()
        } else {
            None
        }
    });

    html! {
        <div class="max-w-lg">
            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100 mb-6">
                {if is_edit { "Edit Customer" } else { "Create New Customer" }}
            </h2>

            <form onsubmit={on_submit} class="space-y-4">
                if let Some(error) = save_error_text {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-sm text-red-700 dark:text-red-400">
                        {error}
                    </div>
                }

                <TextField
                    label="Name"
                    value={(*customer_name).clone()}
                    on_change={on_name_change}
                    error={errors.customer_name.map(AttrValue::Static)}
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value={(*email).clone()}
                    on_change={on_email_change}
                    error={errors.email.map(AttrValue::Static)}
                />
                <TextField
                    label="Phone"
                    input_type="tel"
                    value={(*phone).clone()}
                    on_change={on_phone_change}
                    error={errors.phone.map(AttrValue::Static)}
                />
                <TextField
                    label="Address"
                    value={(*address).clone()}
                    on_change={on_address_change}
                    error={errors.address.map(AttrValue::Static)}
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <TextField
                        label="City"
                        value={(*city).clone()}
                        on_change={on_city_change}
                        error={errors.city.map(AttrValue::Static)}
                    />
                    <TextField
                        label="State"
                        value={(*state).clone()}
                        on_change={on_state_change}
                        error={errors.state.map(AttrValue::Static)}
                    />
                    <TextField
                        label="Zip Code"
                        value={(*zip_code).clone()}
                        on_change={on_zip_change}
                        error={errors.zip_code.map(AttrValue::Static)}
                    />
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
                        {if *is_saving { "Saving..." } else { "Save Customer" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn HomePage() -> Html {
    let card = |route: Route, title: &str, description: &str| {
        html! {
            <Link<Route> to={route} classes="block p-6 rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 hover:border-amber-400 dark:hover:border-amber-500 transition-colors">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-1">
                    {title.to_string()}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {description.to_string()}
                </p>
            </Link<Route>>
        }
    };

    html! {
        <div class="max-w-4xl mx-auto">
            <div class="mb-8">
                <h2 class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Welcome to Taphouse Admin"}
                </h2>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                    {"Manage your inventory, customers, and orders."}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {card(
                    Route::Beers,
                    "Beers",
                    "Browse and manage the beer catalog.",
                )}
                {card(
                    Route::Customers,
                    "Customers",
                    "Look up customer accounts and contact details.",
                )}
                {card(
                    Route::Orders,
                    "Orders",
                    "Track orders through the fulfilment workflow.",
                )}
            </div>
        </div>
    }
}

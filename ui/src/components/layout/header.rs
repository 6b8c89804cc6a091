use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let link_classes = "px-3 py-2 rounded-md text-sm font-medium \
                        text-neutral-700 dark:text-neutral-300 \
                        hover:bg-neutral-100 dark:hover:bg-neutral-700 \
                        transition-colors";

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                                {"Taphouse Admin"}
                            </h1>
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-2">
                        <Link<Route> to={Route::Beers} classes={link_classes}>
                            {"Beers"}
                        </Link<Route>>
                        <Link<Route> to={Route::Customers} classes={link_classes}>
                            {"Customers"}
                        </Link<Route>>
                        <Link<Route> to={Route::Orders} classes={link_classes}>
                            {"Orders"}
                        </Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}

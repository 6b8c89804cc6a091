use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="max-w-4xl mx-auto text-center py-16">
            <h2 class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                {"Page Not Found"}
            </h2>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"The page you are looking for does not exist."}
            </p>
            <Link<Route>
                to={Route::Home}
                classes="px-4 py-2 text-sm font-medium text-white bg-amber-600 hover:bg-amber-700 rounded-md transition-colors"
            >
                {"Go Home"}
            </Link<Route>>
        </div>
    }
}

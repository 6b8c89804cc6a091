use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="border-t border-neutral-200 dark:border-neutral-700 mt-12">
            <div class="max-w-7xl mx-auto py-4 px-4 sm:px-6 lg:px-8 text-center text-sm text-neutral-500 dark:text-neutral-400">
                {"Taphouse Admin - inventory and order management"}
            </div>
        </footer>
    }
}

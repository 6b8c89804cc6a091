use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// The envelope's `first` flag; disables Previous.
    pub first: bool,
    /// The envelope's `last` flag; disables Next.
    pub last: bool,
    /// One-based (from, to, total) as reported by the envelope.
    pub range: (u64, u64, u64),
    /// Plural noun for the summary line, e.g. "beers".
    pub noun: AttrValue,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// Pagination footer for list views. First/last availability comes straight
/// from the server's page envelope, never from local page arithmetic.
#[function_component]
pub fn Pagination(props: &PaginationProps) -> Html {
    let (from, to, total) = props.range;

    let button_classes = "px-4 py-2 text-sm font-medium \
                          text-neutral-700 dark:text-neutral-300 \
                          bg-white dark:bg-neutral-700 \
                          border border-neutral-300 dark:border-neutral-600 rounded-md \
                          hover:bg-neutral-50 dark:hover:bg-neutral-600 \
                          disabled:opacity-50 disabled:cursor-not-allowed \
                          transition-colors";

    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="flex justify-between items-center mt-4">
            <div class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Showing {} to {} of {} {}", from, to, total, props.noun)}
            </div>
            <div class="flex gap-2">
                <button
                    onclick={on_previous}
                    disabled={props.first}
                    class={button_classes}
                >
                    {"Previous"}
                </button>
                <button
                    onclick={on_next}
                    disabled={props.last}
                    class={button_classes}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

use payloads::OrderStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: OrderStatus,
}

/// Colored pill for an order's workflow status.
#[function_component]
pub fn StatusBadge(props: &StatusBadgeProps) -> Html {
    let color_classes = match props.status {
        OrderStatus::New => "bg-blue-100 text-blue-800 dark:bg-blue-900/40 dark:text-blue-300",
        OrderStatus::Pending => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/40 dark:text-yellow-300"
        }
        OrderStatus::Ready => {
            "bg-purple-100 text-purple-800 dark:bg-purple-900/40 dark:text-purple-300"
        }
        OrderStatus::PickedUp => {
            "bg-teal-100 text-teal-800 dark:bg-teal-900/40 dark:text-teal-300"
        }
        OrderStatus::Delivered => {
            "bg-green-100 text-green-800 dark:bg-green-900/40 dark:text-green-300"
        }
        OrderStatus::Cancelled => {
            "bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-300"
        }
    };

    html! {
        <span class={classes!(
            "inline-block",
            "px-2",
            "py-0.5",
            "text-xs",
            "font-medium",
            "rounded-full",
            color_classes,
        )}>
            {props.status.label()}
        </span>
    }
}

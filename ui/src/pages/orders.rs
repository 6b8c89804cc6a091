use payloads::BeerOrderId;
use yew::prelude::*;

use crate::components::order::{OrderDetail, OrderForm, OrderList};
use crate::pages::ResourceView;

/// Order page coordinator. Orders have no edit view; status changes
/// happen from the detail view, so `ResourceView::Edit` is never
/// constructed here.
#[function_component]
pub fn OrdersPage() -> Html {
    let view = use_state(|| ResourceView::<BeerOrderId>::List);

    let show_list = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(ResourceView::finished()))
    };
    let show_detail = {
        let view = view.clone();
        Callback::from(move |id: BeerOrderId| view.set(ResourceView::Detail(id)))
    };
    let show_create = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(ResourceView::Create))
    };

    html! {
        <div class="max-w-4xl mx-auto">
            {match *view {
                ResourceView::List => html! {
                    <OrderList
                        on_view={show_detail}
                        on_create={show_create}
                    />
                },
                ResourceView::Detail(id) => html! {
                    <OrderDetail
                        order_id={id}
                        on_back={show_list}
                    />
                },
                ResourceView::Create | ResourceView::Edit(_) => html! {
                    <OrderForm
                        on_save={show_list.clone()}
                        on_cancel={show_list}
                    />
                },
            }}
        </div>
    }
}

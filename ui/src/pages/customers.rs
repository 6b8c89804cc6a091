use payloads::CustomerId;
use yew::prelude::*;

use crate::components::customer::{CustomerDetail, CustomerForm, CustomerList};
use crate::pages::ResourceView;

#[function_component]
pub fn CustomersPage() -> Html {
    let view = use_state(|| ResourceView::<CustomerId>::List);

    let show_list = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(ResourceView::finished()))
    };
    let show_detail = {
        let view = view.clone();
        Callback::from(move |id: CustomerId| view.set(ResourceView::Detail(id)))
    };
    let show_create = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(ResourceView::Create))
    };
    let show_edit = {
        let view = view.clone();
        Callback::from(move |id: CustomerId| view.set(ResourceView::Edit(id)))
    };

    html! {
        <div class="max-w-4xl mx-auto">
            {match *view {
                ResourceView::List => html! {
                    <CustomerList
                        on_view={show_detail.clone()}
                        on_edit={show_edit.clone()}
                        on_create={show_create}
                    />
                },
                ResourceView::Detail(id) => html! {
                    <CustomerDetail
                        customer_id={id}
                        on_back={show_list.clone()}
                        on_edit={show_edit}
                    />
                },
                ResourceView::Create => html! {
                    <CustomerForm
                        on_save={show_list.clone()}
                        on_cancel={show_list}
                    />
                },
                ResourceView::Edit(id) => html! {
                    <CustomerForm
                        customer_id={id}
                        on_save={show_list.clone()}
                        on_cancel={show_list}
                    />
                },
            }}
        </div>
    }
}

use payloads::BeerId;
use yew::prelude::*;

use crate::components::beer::{BeerDetail, BeerForm, BeerList};
use crate::pages::ResourceView;

#[function_component]
pub fn BeersPage() -> Html {
    let view = use_state(|| ResourceView::<BeerId>::List);

    let show_list = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(ResourceView::finished()))
    };
    let show_detail = {
        let view = view.clone();
        Callback::from(move |id: BeerId| view.set(ResourceView::Detail(id)))
    };
    let show_create = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(ResourceView::Create))
    };
    let show_edit = {
        let view = view.clone();
        Callback::from(move |id: BeerId| view.set(ResourceView::Edit(id)))
    };

    html! {
        <div class="max-w-4xl mx-auto">
            {match *view {
                ResourceView::List => html! {
                    <BeerList
                        on_view={show_detail.clone()}
                        on_edit={show_edit.clone()}
                        on_create={show_create}
                    />
                },
                ResourceView::Detail(id) => html! {
                    <BeerDetail
                        beer_id={id}
                        on_back={show_list.clone()}
                        on_edit={show_edit}
                    />
                },
                ResourceView::Create => html! {
                    <BeerForm
                        on_save={show_list.clone()}
                        on_cancel={show_list}
                    />
                },
                ResourceView::Edit(id) => html! {
                    <BeerForm
                        beer_id={id}
                        on_save={show_list.clone()}
                        on_cancel={show_list}
                    />
                },
            }}
        </div>
    }
}

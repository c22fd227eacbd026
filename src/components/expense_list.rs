use yew::prelude::*;

use crate::components::modal::{InfoModal, UpdateModal};
use crate::model::{format_won, Expense, ModalState};
use crate::tags::{primary_category, tag_for};

#[derive(Properties, PartialEq)]
pub struct ExpensesTagListProps {
    pub daily_list: Vec<Expense>,
    pub on_item_updated: Callback<()>,
}

/// Expense entries for one tag, each row opening a detail or edit
/// modal. At most one modal is open at a time; which one, and for
/// which item, lives in a single `ModalState`.
#[function_component(ExpensesTagList)]
pub fn expenses_tag_list(props: &ExpensesTagListProps) -> Html {
    let modal = use_state(|| ModalState::Closed);

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |()| modal.set(ModalState::Closed))
    };

    if props.daily_list.is_empty() {
        return html! { <p class="text-sm text-muted-foreground px-2 py-4">{"내역이 없습니다!"}</p> };
    }

    html! {
        <>
            <ul class="divide-y divide-border">
                { for props.daily_list.iter().map(|item| {
                    let tag = tag_for(primary_category(&item.category));
                    let open_info = {
                        let modal = modal.clone();
                        let item = item.clone();
                        Callback::from(move |_| modal.set(ModalState::Viewing(item.clone())))
                    };
                    let open_update = {
                        let modal = modal.clone();
                        let item = item.clone();
                        Callback::from(move |_| modal.set(ModalState::Editing(item.clone())))
                    };
                    let amount_class = if item.amount > 0 {
                        "font-semibold text-[#1D617A]"
                    } else {
                        "font-semibold text-foreground"
                    };

                    html! {
                        <li key={item.id.clone()} class="flex items-center justify-between px-2 py-3">
                            <div class="flex items-center gap-2 text-muted-foreground">
                                <span class="text-lg">{ tag.icon }</span>
                                <span class="font-bold text-sm">{ primary_category(&item.category).to_string() }</span>
                            </div>
                            <div class="flex items-center gap-3">
                                <span class={amount_class}>{ format_won(item.amount) }</span>
                                <div class="flex gap-1">
                                    <button onclick={open_info} class="bg-[#D8E1E8] text-[#173E63] px-2 py-1 rounded-md text-[10px] font-bold hover:scale-110 transition-transform">{"상세"}</button>
                                    <button onclick={open_update} class="bg-[#D8E1E8] text-[#173E63] px-2 py-1 rounded-md text-[10px] font-bold hover:scale-110 transition-transform">{"수정"}</button>
                                </div>
                            </div>
                        </li>
                    }
                }) }
            </ul>
            {
                match &*modal {
                    ModalState::Closed => html! {},
                    ModalState::Viewing(item) => html! {
                        <InfoModal expense={item.clone()} on_close={close_modal} />
                    },
                    ModalState::Editing(item) => html! {
                        <UpdateModal expense={item.clone()} on_close={close_modal} on_updated={props.on_item_updated.clone()} />
                    },
                }
            }
        </>
    }
}

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::expense_list::ExpensesTagList;
use crate::model::Expense;
use crate::tags::{primary_category, TAGS};

/// Expense list view with the category-tag selector. A bumped reload
/// counter refetches the list after an edit.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);
    let selected_tag = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let expenses = expenses.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_expenses().await {
                        Ok(list) => expenses.set(list),
                        Err(err) => log::error!("failed to fetch expenses: {err}"),
                    }
                    loading.set(false);
                });
                || ()
            },
            *reload,
        );
    }

    let on_item_updated = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    let filtered: Vec<Expense> = expenses
        .iter()
        .filter(|item| match &*selected_tag {
            Some(tag) => primary_category(&item.category) == tag.as_str(),
            None => true,
        })
        .cloned()
        .collect();

    let tag_button = |label: Option<&'static str>| -> Html {
        let is_active = selected_tag.as_deref() == label;
        let class_name = if is_active {
            "px-3 py-1.5 rounded-full text-xs font-bold bg-[#173E63] text-white transition-all"
        } else {
            "px-3 py-1.5 rounded-full text-xs font-bold bg-[#D8E1E8] text-[#173E63] hover:opacity-80 transition-all"
        };
        let selected_tag = selected_tag.clone();
        let onclick = Callback::from(move |_| selected_tag.set(label.map(str::to_string)));
        html! {
            <button {onclick} class={class_name}>{ label.unwrap_or("전체") }</button>
        }
    };

    html! {
        <div class="p-6 max-w-3xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{"지출 내역"}</h1>
            </div>
            <div class="pt-5 space-y-4">
                <div class="flex flex-wrap gap-2">
                    { tag_button(None) }
                    { for TAGS.iter().map(|tag| tag_button(Some(tag.label))) }
                </div>
                <div class="bg-card rounded-[10px] border border-border px-4 py-2">
                    { if *loading {
                        html! { <p class="text-sm text-muted-foreground px-2 py-4">{"불러오는 중..."}</p> }
                    } else {
                        html! { <ExpensesTagList daily_list={filtered} on_item_updated={on_item_updated} /> }
                    }}
                </div>
            </div>
        </div>
    }
}

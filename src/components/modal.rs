use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api;
use crate::model::{format_won, Expense, ExpenseUpdate};
use crate::tags::{primary_category, tag_for};

#[derive(Properties, PartialEq)]
pub struct InfoModalProps {
    pub expense: Expense,
    pub on_close: Callback<()>,
}

/// Read-only detail view for a single expense entry.
#[function_component(InfoModal)]
pub fn info_modal(props: &InfoModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let tag = tag_for(primary_category(&props.expense.category));

    html! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
            <div class="bg-white rounded-2xl shadow-lg p-6 w-80 space-y-4">
                <div class="flex items-center gap-2 border-b border-border pb-3">
                    <span class="text-xl">{ tag.icon }</span>
                    <h3 class="font-bold text-[#173E63] text-lg">{"상세 내역"}</h3>
                </div>
                <dl class="space-y-2 text-sm">
                    <div class="flex justify-between">
                        <dt class="text-muted-foreground font-bold">{"날짜"}</dt>
                        <dd class="text-foreground">{ props.expense.date.clone() }</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-muted-foreground font-bold">{"카테고리"}</dt>
                        <dd class="text-foreground">{ props.expense.category.clone() }</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-muted-foreground font-bold">{"금액"}</dt>
                        <dd class="font-semibold text-foreground">{ format_won(props.expense.amount) }</dd>
                    </div>
                </dl>
                <button onclick={on_close} class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-xs font-bold hover:opacity-90 transition-all">{"닫기"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UpdateModalProps {
    pub expense: Expense,
    pub on_close: Callback<()>,
    /// Fired after a successful save so the parent list can refetch.
    pub on_updated: Callback<()>,
}

#[function_component(UpdateModal)]
pub fn update_modal(props: &UpdateModalProps) -> Html {
    let form_date = use_state(|| props.expense.date.clone());
    let form_category = use_state(|| props.expense.category.clone());
    let form_amount = use_state(|| props.expense.amount.to_string());
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_submit = {
        let id = props.expense.id.clone();
        let form_date = form_date.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        let on_updated = props.on_updated.clone();

        Callback::from(move |_| {
            let date_val = form_date.trim().to_string();
            let category_val = form_category.trim().to_string();
            let amount_val = form_amount.trim().to_string();

            if date_val.is_empty() || category_val.is_empty() || amount_val.is_empty() {
                form_error.set(Some("모든 항목을 입력해주세요.".to_string()));
                return;
            }
            let amount = amount_val.parse::<i64>().unwrap_or(0);
            if amount == 0 {
                form_error.set(Some("금액은 0이 아닌 숫자여야 합니다.".to_string()));
                return;
            }

            form_error.set(None);
            saving.set(true);

            let id = id.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            let on_updated = on_updated.clone();
            spawn_local(async move {
                let update = ExpenseUpdate {
                    amount,
                    category: category_val,
                    date: date_val,
                };
                match api::update_expense(&id, &update).await {
                    Ok(_) => {
                        on_updated.emit(());
                        on_close.emit(());
                    }
                    Err(err) => {
                        log::error!("failed to update expense {id}: {err}");
                        form_error.set(Some("수정에 실패했습니다.".to_string()));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
            <div class="bg-white rounded-2xl shadow-lg p-6 w-80 space-y-4">
                <h3 class="font-bold text-[#173E63] text-lg border-b border-border pb-3">{"내역 수정"}</h3>
                <div class="space-y-3">
                    <div class="space-y-1">
                        <label class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">{"날짜"}</label>
                        <input type="date" value={(*form_date).clone()} oninput={{
                            let form_date = form_date.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                form_date.set(input.value());
                            })
                        }} class="w-full bg-[#f1f4f9] border-none rounded-xl p-2.5 text-xs font-bold text-[#173E63] outline-none" />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">{"카테고리"}</label>
                        <input type="text" value={(*form_category).clone()} oninput={{
                            let form_category = form_category.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                form_category.set(input.value());
                            })
                        }} class="w-full bg-[#f1f4f9] border-none rounded-xl p-2.5 text-xs font-bold text-[#173E63] outline-none" />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">{"금액"}</label>
                        <input type="number" value={(*form_amount).clone()} oninput={{
                            let form_amount = form_amount.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                form_amount.set(input.value());
                            })
                        }} class="w-full bg-[#f1f4f9] border-none rounded-xl p-2.5 text-xs font-bold text-[#173E63] outline-none" />
                    </div>
                </div>
                {
                    if let Some(msg) = &*form_error {
                        html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                    } else { html!{} }
                }
                <div class="flex gap-2">
                    <button onclick={on_submit} class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-xs font-bold hover:opacity-90 transition-all" disabled={*saving}>
                        { if *saving { "저장 중..." } else { "저장" } }
                    </button>
                    <button onclick={on_close} class="flex-1 bg-[#D8E1E8] text-[#173E63] py-2 rounded-[10px] text-xs font-bold">{"취소"}</button>
                </div>
            </div>
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthPickerProps {
    pub year: i32,
    pub month: u32,
    pub on_change: Callback<(i32, u32)>,
}

/// Year/month selects plus prev/next buttons. The selects are
/// constrained to 2022년–2099년 and 1월–12월, so the page never hands an
/// out-of-range month to the partitioner; the arrow buttons roll the
/// year over at the December/January boundary.
#[function_component(MonthPicker)]
pub fn month_picker(props: &MonthPickerProps) -> Html {
    let year = props.year;
    let month = props.month;

    let on_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if month == 1 {
                on_change.emit((year - 1, 12));
            } else {
                on_change.emit((year, month - 1));
            }
        })
    };

    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if month == 12 {
                on_change.emit((year + 1, 1));
            } else {
                on_change.emit((year, month + 1));
            }
        })
    };

    let on_year = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<i32>() {
                on_change.emit((value, month));
            }
        })
    };

    let on_month = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                on_change.emit((year, value));
            }
        })
    };

    html! {
        <div class="flex items-center gap-2">
            <button onclick={on_prev} class="px-3 py-2 bg-[#D8E1E8] text-[#173E63] rounded-[10px] font-bold hover:opacity-90 transition-all" aria-label="이전 달">{"<"}</button>
            <select onchange={on_year} class="bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-xs font-bold text-[#173E63] border-none outline-none">
                { for (2022..=2099).map(|y| html! {
                    <option value={y.to_string()} selected={y == year}>{ format!("{}년", y) }</option>
                }) }
            </select>
            <select onchange={on_month} class="bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-xs font-bold text-[#173E63] border-none outline-none">
                { for (1..=12u32).map(|m| html! {
                    <option value={m.to_string()} selected={m == month}>{ format!("{}월", m) }</option>
                }) }
            </select>
            <button onclick={on_next} class="px-3 py-2 bg-[#D8E1E8] text-[#173E63] rounded-[10px] font-bold hover:opacity-90 transition-all" aria-label="다음 달">{">"}</button>
        </div>
    }
}

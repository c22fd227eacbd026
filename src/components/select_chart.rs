use yew::prelude::*;

use crate::model::ChartKind;

#[derive(Properties, PartialEq)]
pub struct SelectChartProps {
    pub kind: ChartKind,
    pub on_select: Callback<ChartKind>,
}

#[function_component(SelectChart)]
pub fn select_chart(props: &SelectChartProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(ChartKind::from_str(&input.value()));
        })
    };

    html! {
        <select {onchange} class="bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-xs font-bold text-[#173E63] border-none outline-none">
            { for [ChartKind::Bar, ChartKind::Pie, ChartKind::Doughnut].iter().map(|kind| html! {
                <option value={kind.as_str()} selected={props.kind == *kind}>{ kind.as_str() }</option>
            }) }
        </select>
    }
}

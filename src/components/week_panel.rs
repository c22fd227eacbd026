use std::collections::HashMap;

use yew::prelude::*;

use crate::calendar::Week;
use crate::components::chart::WeekChart;
use crate::model::{format_won, ChartKind};

#[derive(Properties, PartialEq)]
pub struct WeekPanelProps {
    pub week: Week,
    /// 0-based position of the bucket within the month.
    pub index: usize,
    pub daily: HashMap<String, i64>,
    pub kind: ChartKind,
}

/// Collapsible panel for one week bucket: ordinal title and weekly
/// total in the header, period string and the daily chart in the body.
/// The chart stays mounted while collapsed so reopening does not
/// rebuild it from scratch.
#[function_component(WeekPanel)]
pub fn week_panel(props: &WeekPanelProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let summary = props.week.summarize(props.index, &props.daily);
    let series = props.week.chart_series(&props.daily);

    html! {
        <div class="bg-card rounded-[10px] border border-border overflow-hidden">
            <button onclick={toggle} class="w-full px-5 py-4 flex items-center justify-between font-bold text-foreground hover:bg-muted/30 transition-colors cursor-pointer">
                <span>{ summary.title.clone() }</span>
                <span class="text-sm text-muted-foreground">{ format_won(summary.total_expense) }</span>
            </button>
            <div class={if *open { "px-5 pb-5" } else { "hidden" }}>
                <ul class="text-sm text-muted-foreground mb-3 space-y-1">
                    <li>{ summary.period.clone() }</li>
                    <li>{ format!("총 금액: {}", format_won(summary.total_expense)) }</li>
                </ul>
                <WeekChart series={series} kind={props.kind} />
            </div>
        </div>
    }
}

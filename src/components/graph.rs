use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::calendar::{self, date_key};
use crate::components::month_picker::MonthPicker;
use crate::components::select_chart::SelectChart;
use crate::components::week_panel::WeekPanel;
use crate::model::ChartKind;

/// Weekly graph dashboard: the selected month partitioned into week
/// buckets, one collapsible panel per bucket.
#[function_component(GraphPage)]
pub fn graph_page() -> Html {
    let now = js_sys::Date::new_0();
    let selected_year = use_state(|| now.get_full_year() as i32);
    let selected_month = use_state(|| now.get_month() + 1);
    let daily = use_state(HashMap::<String, i64>::new);
    let chart_kind = use_state(|| ChartKind::Bar);
    // Monotonic request token; a summary response is applied only if
    // no newer request has been issued since, so a slow early response
    // cannot overwrite a fast later one.
    let fetch_epoch = use_mut_ref(|| 0u64);

    {
        let daily = daily.clone();
        let fetch_epoch = fetch_epoch.clone();
        use_effect_with_deps(
            move |_| {
                *fetch_epoch.borrow_mut() += 1;
                let token = *fetch_epoch.borrow();
                spawn_local(async move {
                    match api::fetch_daily_summary().await {
                        Ok(records) => {
                            if *fetch_epoch.borrow() != token {
                                log::debug!("discarding stale daily summary response");
                                return;
                            }
                            let map: HashMap<String, i64> = records
                                .into_iter()
                                .map(|r| (r.date, r.total_amount))
                                .collect();
                            daily.set(map);
                        }
                        // Keep whatever was displayed before; no retry.
                        Err(err) => log::error!("failed to fetch daily summary: {err}"),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_month_change = {
        let selected_year = selected_year.clone();
        let selected_month = selected_month.clone();
        Callback::from(move |(year, month): (i32, u32)| {
            selected_year.set(year);
            selected_month.set(month);
        })
    };

    let on_select_chart = {
        let chart_kind = chart_kind.clone();
        Callback::from(move |kind: ChartKind| chart_kind.set(kind))
    };

    let weeks = match calendar::weeks_in_month(*selected_year, *selected_month) {
        Ok(weeks) => weeks,
        Err(err) => {
            // The picker only emits valid months, so this is unreachable
            // through the UI.
            log::error!("cannot partition {}-{}: {err}", *selected_year, *selected_month);
            Vec::new()
        }
    };

    html! {
        <div class="p-6 max-w-3xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{"주간 그래프"}</h1>
                <SelectChart kind={*chart_kind} on_select={on_select_chart} />
            </div>
            <div class="pt-5 space-y-4">
                <MonthPicker year={*selected_year} month={*selected_month} on_change={on_month_change} />
                { for weeks.iter().enumerate().map(|(index, week)| html! {
                    <WeekPanel
                        key={date_key(week.start_date())}
                        week={week.clone()}
                        index={index}
                        daily={(*daily).clone()}
                        kind={*chart_kind}
                    />
                }) }
            </div>
        </div>
    }
}

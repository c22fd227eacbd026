mod api;
mod calendar;
mod components;
mod model;
mod tags;

use yew::prelude::*;

use components::graph::GraphPage;
use components::home::HomePage;

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Home,
    Graph,
}

struct NavItem {
    label: &'static str,
    page: Page,
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Home);

    let nav_items = [
        NavItem { label: "지출 내역", page: Page::Home },
        NavItem { label: "주간 그래프", page: Page::Graph },
    ];

    html! {
        <div class="min-h-screen bg-background flex flex-col">
            <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
                <span class="text-[#173E63] text-xl font-black tracking-tight">{"가계부"}</span>
                <nav class="flex gap-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == *active_page;
                        let class_name = if is_active {
                            "px-4 py-2 rounded-xl text-[13px] font-bold bg-[#173E63] text-white transition-all"
                        } else {
                            "px-4 py-2 rounded-xl text-[13px] font-bold text-[#173E63] hover:bg-white/40 transition-all"
                        };
                        let active_page = active_page.clone();
                        let page = item.page;
                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| active_page.set(page))}>
                                { item.label }
                            </button>
                        }
                    }) }
                </nav>
            </header>
            <main class="flex-1 overflow-y-auto">
                {
                    match *active_page {
                        Page::Home => html! { <HomePage /> },
                        Page::Graph => html! { <GraphPage /> },
                    }
                }
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}

use leptos::prelude::*;
use utils::pagination::{scroll_to_table_top, PageItem, Pager, WindowStyle};

const NAV_BUTTON: &str = "px-3 py-1.5 rounded-md border border-neutral-300 text-sm text-neutral-700 hover:bg-neutral-100 disabled:opacity-40 disabled:cursor-not-allowed";
const PAGE_BUTTON: &str = "min-w-9 px-2 py-1.5 rounded-md text-sm text-sky-800 hover:bg-sky-50";
const ACTIVE_PAGE_BUTTON: &str = "min-w-9 px-2 py-1.5 rounded-md text-sm font-semibold bg-sky-700 text-white";

#[component]
pub fn PageSizeSelect(pager: RwSignal<Pager>, options: &'static [usize]) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-neutral-600">
            "Per page:"
            <select
                class="px-2 py-1 rounded-md border border-neutral-300 bg-white"
                prop:value=move || pager.with(|p| p.page_size().to_string())
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        pager.update(|p| p.set_page_size(size));
                    }
                }
            >
                {options
                    .iter()
                    .map(|size| {
                        let size = size.to_string();
                        view! { <option value=size.clone()>{size.clone()}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn PageControls(pager: RwSignal<Pager>, style: WindowStyle) -> impl IntoView {
    let goto = move |page: usize| {
        if pager.try_update(|p| p.goto(page)).unwrap_or(false) {
            scroll_to_table_top();
        }
    };
    let no_prev = move || !pager.with(Pager::has_prev);
    let no_next = move || !pager.with(Pager::has_next);

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 mt-4">
            <div class="flex gap-2">
                <button class=NAV_BUTTON disabled=no_prev on:click=move |_| goto(1)>
                    "First"
                </button>
                <button
                    class=NAV_BUTTON
                    disabled=no_prev
                    on:click=move |_| goto(pager.with(Pager::page).saturating_sub(1))
                >
                    "Prev"
                </button>
            </div>
            <div class="flex flex-wrap gap-1" aria-label="Page navigation">
                {move || {
                    let current = pager.with(Pager::page);
                    pager
                        .with(|p| p.window(style))
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => {
                                let active = page == current;
                                view! {
                                    <button
                                        class=if active { ACTIVE_PAGE_BUTTON } else { PAGE_BUTTON }
                                        aria-current=active.then_some("page")
                                        on:click=move |_| goto(page)
                                    >
                                        {page}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageItem::Gap => {
                                view! { <span class="px-2 py-1.5 text-neutral-400">"…"</span> }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="flex gap-2">
                <button
                    class=NAV_BUTTON
                    disabled=no_next
                    on:click=move |_| goto(pager.with(Pager::page) + 1)
                >
                    "Next"
                </button>
                <button
                    class=NAV_BUTTON
                    disabled=no_next
                    on:click=move |_| goto(pager.with(Pager::total_pages))
                >
                    "Last"
                </button>
            </div>
        </div>
    }
}

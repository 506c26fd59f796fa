use consts::{CONTEST_PAGE_SIZES, DEFAULT_PAGE_SIZE, RATINGS_PAGE_SIZES};
use leptos::prelude::*;
use utils::pagination::{Pager, WindowStyle};
use utils::profile::Platform;
use utils::ratings::{rating_columns, RatingRow};
use utils::standings::{standing_columns, ContestStandingRow};
use utils::types::{Cell, TableRow};

use crate::pagination::{PageControls, PageSizeSelect};

fn render_cell(cell: Cell) -> AnyView {
    let text = cell.display();
    match cell {
        Cell::Handle { platform, handle } => view! {
            <a
                href=platform.profile_url(&handle)
                target="_blank"
                rel="noopener noreferrer"
                class="text-sky-700 font-medium hover:underline"
            >
                {text}
            </a>
        }
        .into_any(),
        Cell::Text(_) => text.into_any(),
    }
}

/// Client-side paginated table over rows already held in memory
#[component]
pub fn DataTable<R: TableRow>(
    #[prop(into)] title: String,
    columns: &'static [&'static str],
    rows: Vec<R>,
    page_sizes: &'static [usize],
    style: WindowStyle,
) -> impl IntoView {
    let pager = RwSignal::new(Pager::new(rows.len(), DEFAULT_PAGE_SIZE));
    let rows = StoredValue::new(rows);
    let page_rows = move || pager.with(|p| rows.with_value(|r| p.slice(r).to_vec()));
    let span = columns.len().to_string();

    view! {
        <div id="table" class="w-full bg-white rounded-xl shadow p-4 md:p-6">
            <Show when={
                let empty = title.is_empty();
                move || !empty
            }>
                <h3 class="text-xl font-bold text-sky-900 text-center mb-4">{title.clone()}</h3>
            </Show>
            <div class="flex flex-wrap justify-between items-center gap-2 mb-3 text-sm text-neutral-600">
                <div>
                    {move || {
                        pager
                            .with(|p| {
                                format!("Showing {}–{} of {}", p.showing_from(), p.showing_to(), p.total())
                            })
                    }}
                </div>
                <PageSizeSelect pager options=page_sizes />
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-center">
                    <thead>
                        <tr class="border-b border-sky-100 bg-sky-50">
                            {columns
                                .iter()
                                .map(|label| {
                                    view! {
                                        <th class="py-3 px-3 text-sm font-semibold text-sky-900">{*label}</th>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || pager.with(|p| p.total() > 0)
                            fallback=move || {
                                view! {
                                    <tr>
                                        <td colspan=span.clone() class="py-8 text-neutral-500">
                                            "No users found."
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            <For each=page_rows key=|row| row.row_key() let:row>
                                <tr class="border-b border-neutral-100 hover:bg-sky-50/50">
                                    {row
                                        .cells()
                                        .into_iter()
                                        .map(|cell| view! { <td class="py-3 px-3 text-sm">{render_cell(cell)}</td> })
                                        .collect_view()}
                                </tr>
                            </For>
                        </Show>
                    </tbody>
                </table>
            </div>
            <PageControls pager style />
        </div>
    }
}

#[component]
pub fn RatingsTable(
    #[prop(into)] title: String,
    platform: Platform,
    rows: Vec<RatingRow>,
) -> impl IntoView {
    view! {
        <DataTable
            title
            columns=rating_columns(platform)
            rows
            page_sizes=&RATINGS_PAGE_SIZES
            style=WindowStyle::Gapped
        />
    }
}

#[component]
pub fn ContestTable(
    #[prop(into)] title: String,
    platform: Platform,
    rows: Vec<ContestStandingRow>,
) -> impl IntoView {
    view! {
        <DataTable
            title
            columns=standing_columns(platform)
            rows
            page_sizes=&CONTEST_PAGE_SIZES
            style=WindowStyle::Sliding
        />
    }
}

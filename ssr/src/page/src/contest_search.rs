use component::spinner::LoadingBox;
use component::table::ContestTable;
use component::tabs::TabBar;
use component::title::PageHeader;
use component::upcoming::UpcomingContests;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::*;
use utils::api::BackendClient;
use utils::profile::Platform;
use utils::standings::{search_contest, AtCoderKind, ContestQuery, ContestResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Search,
    Upcoming,
}

/// A finished search, kept together with the query that produced it
#[derive(Clone, Debug)]
struct Searched {
    query: ContestQuery,
    result: ContestResult,
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "flex items-center gap-2 px-4 py-2 rounded-lg border-2 border-sky-700 bg-sky-50 text-sky-900 font-semibold"
    } else {
        "flex items-center gap-2 px-4 py-2 rounded-lg border-2 border-neutral-200 bg-white text-neutral-700 hover:border-sky-300"
    }
}

#[component]
fn SearchResults(searched: Searched) -> impl IntoView {
    let Searched { query, result } = searched;
    let link = query.full_standings_link();

    if result.rows.is_empty() {
        return view! {
            <div class="flex flex-col items-center gap-2 py-10 text-center">
                <Icon icon=icondata::FiFileText width="48" height="48" />
                <h3 class="text-xl font-semibold text-sky-900">"No AUST Participants Found"</h3>
                <p class="text-neutral-600">{format!("No AUST students participated in {}", result.title)}</p>
            </div>
        }
            .into_any();
    }

    let found = format!("{} AUST participants found", result.rows.len());
    view! {
        <section class="mt-8">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-4">
                <div>
                    <h3 class="text-2xl font-bold text-sky-900">{result.title.clone()}</h3>
                    <p class="text-neutral-600">{found}</p>
                </div>
                {link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-sky-700 text-white font-semibold hover:bg-sky-800"
                            >
                                <Icon icon=icondata::FiExternalLink />
                                "View Full Standings"
                            </a>
                        }
                    })}
            </div>
            <ContestTable title=result.title platform=query.platform rows=result.rows />
        </section>
    }
        .into_any()
}

#[component]
fn SearchForm() -> impl IntoView {
    let query = RwSignal::new(ContestQuery::new(Platform::AtCoder, ""));
    let loading = RwSignal::new(false);
    let progress = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<Searched, String>>);

    let blank = move || query.with(|q| q.contest_id().is_empty());

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() || blank() {
            return;
        }
        let query = query.get_untracked();
        outcome.set(None);
        loading.set(true);
        spawn_local(async move {
            let client = BackendClient::default();
            let res = search_contest(&client, &query, |line| progress.set(line.to_string())).await;
            let res = match res {
                Ok(result) => Ok(Searched { query, result }),
                Err(e) => {
                    log::error!("contest search error: {e}");
                    Err(e.to_string())
                }
            };
            outcome.set(Some(res));
            loading.set(false);
            progress.set(String::new());
        });
    };

    view! {
        <div class="rounded-2xl bg-white shadow p-6">
            <h2 class="text-xl font-bold text-sky-900">"Search Contest Standings"</h2>
            <p class="text-sm text-neutral-600 mb-6">"Enter contest details to view AUST participants"</p>
            <form class="flex flex-col gap-5" on:submit=on_search>
                <div>
                    <label class="block font-semibold mb-2">"Platform"</label>
                    <div class="flex flex-wrap gap-3">
                        {Platform::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || option_class(query.with(|q| q.platform == p))
                                        on:click=move |_| query.update(|q| q.platform = p)
                                    >
                                        <span class="text-xs font-bold rounded bg-sky-100 px-1.5 py-0.5">
                                            {p.badge()}
                                        </span>
                                        <span>{p.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Show when=move || query.with(|q| q.platform == Platform::AtCoder)>
                    <div>
                        <label class="block font-semibold mb-2">"Contest Type"</label>
                        <div class="flex flex-wrap gap-3">
                            {AtCoderKind::ALL
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || option_class(query.with(|q| q.atcoder_kind == kind))
                                            on:click=move |_| query.update(|q| q.atcoder_kind = kind)
                                        >
                                            {kind.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
                <div>
                    <label for="contest-id" class="block font-semibold mb-2">
                        "Contest ID "
                        <span class="text-sm font-normal text-neutral-500">
                            {move || query.with(|q| q.id_hint())}
                        </span>
                    </label>
                    <input
                        id="contest-id"
                        type="text"
                        required=true
                        class="w-full rounded-lg border border-neutral-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-sky-500"
                        placeholder=move || query.with(|q| q.id_placeholder())
                        prop:value=move || query.with(|q| q.contest_id.clone())
                        on:input=move |ev| query.update(|q| q.contest_id = event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="inline-flex items-center justify-center gap-2 px-6 py-3 rounded-xl bg-sky-700 text-white font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || blank() || loading.get()
                >
                    <Show
                        when=move || loading.get()
                        fallback=|| view! { <Icon icon=icondata::FiSearch /> <span>"Search Contest"</span> }
                    >
                        <span>"Searching..."</span>
                    </Show>
                </button>
            </form>
        </div>

        <Show when=move || loading.get()>
            <div class="mt-8 rounded-2xl bg-white shadow p-6 text-center">
                <div class="font-semibold text-sky-900">"Searching Contest"</div>
                <LoadingBox message=progress />
            </div>
        </Show>

        {move || {
            if loading.get() {
                return None;
            }
            Some(match outcome.get()? {
                Ok(searched) => view! { <SearchResults searched /> }.into_any(),
                Err(message) => {
                    view! {
                        <div class="mt-8 flex items-start gap-3 rounded-2xl border border-red-200 bg-red-50 p-5 text-red-700">
                            <Icon icon=icondata::FiAlertCircle width="24" height="24" />
                            <div>
                                <div class="font-semibold">"Search Failed"</div>
                                <div class="text-sm">{message}</div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            })
        }}
    }
}

#[component]
pub fn ContestSearch() -> impl IntoView {
    let mode = RwSignal::new(Mode::Search);

    view! {
        <div class="max-w-6xl mx-auto px-4 py-10">
            <PageHeader
                title="Contest Search"
                subtitle="Search and analyze AUST performance in specific contests"
            />
            <TabBar
                options=vec![(Mode::Search, "Contest Search"), (Mode::Upcoming, "Upcoming Contests")]
                active=mode
            />
            {move || match mode.get() {
                Mode::Search => view! { <SearchForm /> }.into_any(),
                Mode::Upcoming => view! { <UpcomingContests /> }.into_any(),
            }}
        </div>
    }
}


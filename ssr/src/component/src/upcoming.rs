use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_icons::*;
use utils::api::{fetch_upcoming_contests, BackendClient};
use utils::types::PLACEHOLDER;
use utils::upcoming::{contest_link, display_start, duration, sort_upcoming, starts_in, UpcomingContest};

use crate::spinner::LoadingBox;

const HEADERS: [&str; 6] = [
    "Platform",
    "Contest Title",
    "Start Time",
    "Starts In",
    "Duration",
    "Contest Link",
];

#[component]
fn ContestRow(contest: UpcomingContest, now: DateTime<Utc>) -> impl IntoView {
    let label = contest.platform.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    let (badge, badge_class) = match contest.platform() {
        Some(p) => (p.badge(), format!("badge-{}", p.slug())),
        None => ("?", "badge-other".to_string()),
    };
    let link = contest_link(&contest);

    view! {
        <tr class="border-b border-neutral-100 hover:bg-sky-50/50">
            <td class="py-3 px-3">
                <div class="flex items-center gap-2 justify-center">
                    <span class=format!("{badge_class} w-7 h-7 rounded-full text-xs font-bold flex items-center justify-center bg-sky-100 text-sky-900")>
                        {badge}
                    </span>
                    <span>{label}</span>
                </div>
            </td>
            <td class="py-3 px-3 font-medium">{contest.name().to_string()}</td>
            <td class="py-3 px-3">{display_start(&contest, now)}</td>
            <td class="py-3 px-3">{starts_in(&contest, now)}</td>
            <td class="py-3 px-3">{duration(&contest)}</td>
            <td class="py-3 px-3">
                {match link {
                    Some(href) => {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-1 text-sky-700 hover:underline"
                            >
                                <Icon icon=icondata::FiExternalLink />
                                "View Contest"
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { <span class="text-neutral-400">{PLACEHOLDER}</span> }.into_any(),
                }}
            </td>
        </tr>
    }
}

#[component]
fn UpcomingTable(contests: Vec<UpcomingContest>) -> impl IntoView {
    let now = Utc::now();
    let empty = contests.is_empty();

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-center text-sm">
                <thead>
                    <tr class="border-b border-sky-100 bg-sky-50">
                        {HEADERS
                            .iter()
                            .map(|h| view! { <th class="py-3 px-3 font-semibold text-sky-900">{*h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !empty>
                        {contests
                            .clone()
                            .into_iter()
                            .map(|contest| view! { <ContestRow contest now /> })
                            .collect_view()}
                    </Show>
                    <Show when=move || empty>
                        <tr>
                            <td colspan="6" class="py-10 text-neutral-500">
                                <div class="flex flex-col items-center gap-2">
                                    <Icon icon=icondata::FiFileText width="48" height="48" />
                                    "No upcoming contests found."
                                </div>
                            </td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn UpcomingContests() -> impl IntoView {
    let contests = LocalResource::new(|| async move {
        let client = BackendClient::default();
        let mut list = fetch_upcoming_contests(&client)
            .await
            .map_err(|e| e.to_string())?
            .contests;
        sort_upcoming(&mut list, Utc::now());
        Ok::<_, String>(list)
    });

    view! {
        <div class="w-full bg-white rounded-xl shadow p-4 md:p-6">
            <div class="text-center mb-4">
                <h2 class="text-2xl font-bold text-sky-900">"Upcoming Contests"</h2>
                <p class="text-sm text-neutral-600">
                    "Stay updated with the latest competitive programming contests"
                </p>
            </div>
            <Suspense fallback=|| {
                view! { <LoadingBox message="Loading upcoming contests..." /> }
            }>
                {move || Suspend::new(async move {
                    match contests.await {
                        Ok(list) => view! { <UpcomingTable contests=list /> }.into_any(),
                        Err(e) => {
                            log::warn!("upcoming contests unavailable: {e}");
                            view! {
                                <div class="flex flex-col items-center gap-2 py-10 text-red-700">
                                    <Icon icon=icondata::FiAlertTriangle width="48" height="48" />
                                    "Failed to fetch upcoming contests."
                                </div>
                            }
                                .into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

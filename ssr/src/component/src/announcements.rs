use leptos::prelude::*;
use leptos_icons::*;

use crate::modal::Modal;

struct Announcement {
    title: &'static str,
    date: &'static str,
    body: &'static str,
}

const ANNOUNCEMENTS: [Announcement; 2] = [
    Announcement {
        title: "AUST CP Hub is Live!",
        date: "November 5, 2025",
        body: "The centralized platform is now live! Track ratings, standings, and contest history across all major platforms. Explore, compete, and climb the leaderboard.",
    },
    Announcement {
        title: "Upcoming Contests in One Place",
        date: "November 5, 2025",
        body: "The Contest Search page now lists upcoming AtCoder, Codeforces and CodeChef contests with their start time in Bangladesh time, a countdown and a direct link.",
    },
];

#[component]
pub fn AnnouncementList() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4">
            <p class="text-sm text-neutral-600">
                "Here are the latest updates, features, and news from our community."
            </p>
            {ANNOUNCEMENTS
                .iter()
                .map(|a| {
                    view! {
                        <div class="rounded-lg border border-sky-100 bg-sky-50/60 p-4">
                            <h3 class="font-semibold text-sky-900">{a.title}</h3>
                            <p class="text-xs text-neutral-500 mb-2">{a.date}</p>
                            <p class="text-sm text-neutral-700">{a.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Scrolling strip that opens the announcements dialog
#[component]
pub fn AnnouncementBar() -> impl IntoView {
    let show = RwSignal::new(false);

    view! {
        <button
            class="w-full overflow-hidden whitespace-nowrap bg-amber-100 text-amber-900 text-sm py-2 cursor-pointer"
            on:click=move |_| show.set(true)
        >
            <span class="inline-flex items-center gap-2 animate-marquee">
                <Icon icon=icondata::FiInfo />
                "Click here to view all announcements."
            </span>
        </button>
        <Modal show title="Announcements">
            <AnnouncementList />
        </Modal>
    }
}

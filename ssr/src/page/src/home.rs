use component::announcements::AnnouncementBar;
use consts::SITE_TITLE;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_router::components::A;

#[component]
fn HeroLink(href: &'static str, label: &'static str, icon: icondata::Icon) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-xl font-semibold bg-sky-700 text-white shadow hover:bg-sky-800 transition"
        >
            <Icon icon=icon />
            {label}
        </A>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-[70vh]">
            <AnnouncementBar />
            <section class="flex flex-col flex-1 items-center justify-center text-center px-6 py-16 gap-6">
                <h1 class="text-4xl md:text-5xl font-bold text-sky-900">{SITE_TITLE}</h1>
                <p class="max-w-2xl text-lg text-neutral-600">
                    "Monitor ratings, standings, and contest history of AUST competitors across AtCoder, Codeforces, and CodeChef. Stay updated and never miss a contest!"
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <HeroLink href="/standings/overall" label="Overall Standings" icon=icondata::FiBarChart2 />
                    <HeroLink href="/standings/contest" label="Contest Search" icon=icondata::FiSearch />
                    <HeroLink href="/report-cheater" label="Report Cheater" icon=icondata::FiFlag />
                </div>
            </section>
        </div>
    }
}

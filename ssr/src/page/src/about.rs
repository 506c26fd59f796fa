use component::tabs::TabBar;
use component::title::PageHeader;
use consts::ADMIN_EMAIL;
use leptos::prelude::*;
use leptos_icons::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Mission,
    Stats,
    Vision,
}

const PRINCIPLES: [&str; 4] = [
    "Transparency and accurate ranking system",
    "Elevating students through honest competition",
    "Zero-tolerance policy for cheaters",
    "Automation with human accountability",
];

const STATS: [(&str, &str); 4] = [
    ("250+", "Registered AUST Users"),
    ("10K+", "Contests Tracked"),
    ("99%", "Uptime"),
    ("3+", "OJ Platforms Supported"),
];

fn mission() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-4">
            <h2 class="text-2xl font-bold text-sky-900">"Why This Platform Exists"</h2>
            <p class="text-neutral-700">
                "The primary goal is to encourage and nurture healthy competitive programming among AUST students by offering transparent performance tracking, motivation through ranks, and strict anti-cheating policies."
            </p>
            <h3 class="font-semibold text-sky-900">"Our Core Principles"</h3>
            <ul class="flex flex-col gap-2">
                {PRINCIPLES
                    .iter()
                    .map(|p| {
                        view! {
                            <li class="flex items-center gap-2">
                                <Icon icon=icondata::FiCheckCircle />
                                {*p}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

fn stats() -> impl IntoView {
    let features: [(&str, icondata::Icon); 4] = [
        ("Live updated standings", icondata::FiActivity),
        ("Rating Tracker from CF, CC & AtCoder", icondata::FiTrendingUp),
        ("Report & Ban Cheaters", icondata::FiShield),
        ("Leaderboards", icondata::FiAward),
    ];

    view! {
        <section class="flex flex-col gap-6">
            <h2 class="text-2xl font-bold text-sky-900">"Platform at a Glance"</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="rounded-xl bg-sky-50 p-4 text-center">
                                <div class="text-3xl font-bold text-sky-800">{*value}</div>
                                <div class="text-sm text-neutral-600">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <h3 class="font-semibold text-sky-900">"Highlight Features"</h3>
            <ul class="grid md:grid-cols-2 gap-3">
                {features
                    .into_iter()
                    .map(|(label, icon)| {
                        view! {
                            <li class="flex items-center gap-2 rounded-lg border border-neutral-200 p-3">
                                <Icon icon=icon />
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

fn vision() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-4">
            <h2 class="text-2xl font-bold text-sky-900">"Long-Term Vision"</h2>
            <p class="text-neutral-700">
                "Beyond just statistics, we aim to create a competitive programming hub that encourages real growth, collaboration, and ethical conduct. From local contests to global ones, we envision our students standing out for their integrity and brilliance."
            </p>
            <h3 class="font-semibold text-sky-900">"Contact"</h3>
            <p class="flex items-center gap-2">
                <Icon icon=icondata::FiMail />
                "Email: "
                <a class="text-sky-700 underline" href=format!("mailto:{ADMIN_EMAIL}")>
                    {ADMIN_EMAIL}
                </a>
            </p>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let tab = RwSignal::new(Tab::Mission);

    view! {
        <div class="max-w-4xl mx-auto px-4 py-10">
            <PageHeader title="About" subtitle="Empowering AUST Competitive Programmers" />
            <TabBar
                options=vec![
                    (Tab::Mission, "Mission & Values"),
                    (Tab::Stats, "Stats & Features"),
                    (Tab::Vision, "Vision & Contact"),
                ]
                active=tab
            />
            <div class="rounded-2xl bg-white shadow p-6">
                {move || match tab.get() {
                    Tab::Mission => mission().into_any(),
                    Tab::Stats => stats().into_any(),
                    Tab::Vision => vision().into_any(),
                }}
            </div>
        </div>
    }
}

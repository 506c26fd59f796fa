use component::forms::report::ReportForm;
use component::tabs::TabBar;
use component::title::PageHeader;
use leptos::prelude::*;
use leptos_icons::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Instructions,
    Form,
}

const HINTS: [&str; 3] = [
    "Provide exact handle and platform (e.g. Codeforces, AtCoder, CodeChef).",
    "Include contest ID and a link or screenshot if possible.",
    "Describe the incident clearly with context and timing.",
];

#[component]
pub fn ReportCheater() -> impl IntoView {
    let tab = RwSignal::new(Tab::Instructions);

    let instructions = move || {
        view! {
            <div class="flex flex-col gap-5 text-neutral-700">
                <div class="flex items-center gap-3">
                    <Icon icon=icondata::FiFlag width="28" height="28" />
                    <div>
                        <h2 class="text-2xl font-bold text-sky-900">"Report a Cheater"</h2>
                        <p class="text-sm text-neutral-500">
                            "Submit a report (11 September Onwards) — we'll review it carefully."
                        </p>
                    </div>
                </div>
                <p>
                    "Fill the form in the Report Form tab to report suspected cheating or unfair conduct."
                </p>
                <section>
                    <h3 class="font-semibold text-sky-900 mb-2">"What helps us act faster"</h3>
                    <ul class="list-disc pl-6 space-y-1">
                        {HINTS.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                    </ul>
                </section>
                <section class="rounded-xl border border-sky-100 bg-sky-50/60 p-5">
                    <h3 class="flex items-center gap-2 font-semibold text-sky-900 mb-2">
                        <Icon icon=icondata::FiShield />
                        "Privacy & Process"
                    </h3>
                    <p>
                        "All reports are reviewed manually and kept strictly confidential. If verification is needed, we may reach out to you, but your identity will always remain anonymous."
                    </p>
                </section>
                <button
                    class="self-start inline-flex items-center gap-2 px-5 py-2 rounded-lg bg-sky-700 text-white font-semibold hover:bg-sky-800"
                    on:click=move |_| tab.set(Tab::Form)
                >
                    <Icon icon=icondata::FiEdit />
                    "Fill Out Report"
                </button>
            </div>
        }
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-10">
            <PageHeader title="Report Cheater" />
            <TabBar
                options=vec![(Tab::Instructions, "Instructions"), (Tab::Form, "Report Form")]
                active=tab
            />
            <div class="rounded-2xl bg-white shadow p-6">
                {move || match tab.get() {
                    Tab::Instructions => instructions().into_any(),
                    Tab::Form => view! { <ReportForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

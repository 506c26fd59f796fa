use component::tabs::TabBar;
use component::title::PageHeader;
use leptos::prelude::*;
use leptos_icons::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Rules,
    List,
}

/// A verified cheating case published on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ShameEntry {
    name: &'static str,
    reason: &'static str,
}

const ENTRIES: &[ShameEntry] = &[];

const INCLUSION_CRITERIA: [&str; 7] = [
    "Confirmed plagiarism, copying, or account sharing.",
    "Evidence of collusion during contests.",
    "False representation of teams or members.",
    "Plagiarizing code or logic from online sources.",
    "Using multiple accounts to manipulate rankings.",
    "Leaking or distributing contest problems/solutions.",
    "Using AI/automation in unauthorized ways.",
];

const CONSEQUENCES: [&str; 5] = [
    "Permanent bans from the entire AUST Competitive Programming Community, including all future contests, events, and activities.",
    "Exposure on AUST Programming Group with a public announcement of the violation to the entire community.",
    "Restriction from representing AUST in any future programming competition.",
    "Any apology after cheating will not be accepted or reduce the penalty.",
    "Added to Hall of Shame permanently.",
];

/// Case-insensitive match on name or reason; a blank query keeps everything
fn filter_entries(entries: &[ShameEntry], query: &str) -> Vec<ShameEntry> {
    let query = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| {
            query.is_empty()
                || e.name.to_lowercase().contains(&query)
                || e.reason.to_lowercase().contains(&query)
        })
        .copied()
        .collect()
}

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="list-disc pl-6 space-y-1">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn Rules() -> impl IntoView {
    view! {
        <article class="flex flex-col gap-5 text-neutral-700">
            <h2 class="flex items-center gap-2 text-2xl font-bold text-red-700">
                <Icon icon=icondata::FiSlash />
                "Zero Tolerance for Cheating"
            </h2>
            <p>
                "Cheating is a serious breach of our contest policies and academic integrity standards. To uphold fair competition, we maintain a public record of verified instances of cheating."
            </p>
            <section>
                <h3 class="font-semibold text-sky-900 mb-2">"Criteria for Inclusion"</h3>
                {bullet_list(&INCLUSION_CRITERIA)}
            </section>
            <section>
                <h3 class="font-semibold text-sky-900 mb-2">"Consequences of Misconduct"</h3>
                {bullet_list(&CONSEQUENCES)}
            </section>
            <p class="rounded-lg bg-amber-50 border border-amber-200 p-4 text-amber-900 font-medium">
                "⚠️ We track logs, submissions, and behaviors carefully. Once caught, there's no going back."
            </p>
        </article>
    }
}

#[component]
fn ShameList() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let matches = Memo::new(move |_| search.with(|q| filter_entries(ENTRIES, q)));

    view! {
        <article class="flex flex-col gap-5">
            <h2 class="text-2xl font-bold text-sky-900">"💀 Hall of Shame"</h2>
            <input
                type="text"
                aria-label="Search cheaters"
                placeholder="Search by name or reason..."
                class="w-full rounded-lg border border-neutral-300 px-3 py-2"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show
                when=move || !matches.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <p class="py-8 text-center text-neutral-600" aria-label="No cheaters listed">
                            "Hall of Shame (0 entries). Guess we're still in the Hall of Fame 🏆"
                        </p>
                    }
                }
            >
                <ul class="divide-y divide-neutral-200">
                    <For each=move || matches.get() key=|e| e.name let:entry>
                        <li class="py-3">
                            <div class="font-semibold text-red-700">{entry.name}</div>
                            <div class="text-sm text-neutral-600">{entry.reason}</div>
                        </li>
                    </For>
                </ul>
            </Show>
        </article>
    }
}

#[component]
pub fn HallOfShame() -> impl IntoView {
    let tab = RwSignal::new(Tab::Rules);

    view! {
        <div class="max-w-4xl mx-auto px-4 py-10">
            <PageHeader title="Hall of Shame" />
            <TabBar options=vec![(Tab::Rules, "Rules & Guidelines"), (Tab::List, "Hall of Shame")] active=tab />
            <div class="rounded-2xl bg-white shadow p-6">
                {move || match tab.get() {
                    Tab::Rules => view! { <Rules /> }.into_any(),
                    Tab::List => view! { <ShameList /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [ShameEntry; 2] = [
        ShameEntry {
            name: "alice_cf",
            reason: "Account sharing in Round 900",
        },
        ShameEntry {
            name: "bob",
            reason: "Leaked ABC350 solutions",
        },
    ];

    #[test]
    fn search_matches_name_or_reason() {
        assert_eq!(filter_entries(&SAMPLE, "ALICE"), vec![SAMPLE[0]]);
        assert_eq!(filter_entries(&SAMPLE, "abc350"), vec![SAMPLE[1]]);
        assert!(filter_entries(&SAMPLE, "nobody").is_empty());
        assert_eq!(filter_entries(&SAMPLE, "  ").len(), 2);
    }

    #[test]
    fn published_list_starts_empty() {
        assert!(filter_entries(ENTRIES, "").is_empty());
    }
}

use component::spinner::LoadingBox;
use component::table::RatingsTable;
use component::tabs::TabBar;
use component::title::PageHeader;
use consts::{INSTITUTION, LOADING_MESSAGES, LOADING_MESSAGE_INTERVAL};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::*;
use leptos_use::use_interval_fn;
use utils::api::{fetch_ratings, BackendClient};
use utils::profile::Platform;
use utils::ratings::{overall_standings, RatingRow};

#[derive(Clone, Debug)]
enum Standings {
    Idle,
    Loading,
    Failed,
    Ready(Vec<RatingRow>),
}

/// One slot per platform so a late response never re-renders another tab
#[derive(Clone, Copy)]
struct Slots {
    atcoder: RwSignal<Standings>,
    codeforces: RwSignal<Standings>,
    codechef: RwSignal<Standings>,
}

impl Slots {
    fn new() -> Self {
        Self {
            atcoder: RwSignal::new(Standings::Idle),
            codeforces: RwSignal::new(Standings::Idle),
            codechef: RwSignal::new(Standings::Idle),
        }
    }

    fn get(self, platform: Platform) -> RwSignal<Standings> {
        match platform {
            Platform::AtCoder => self.atcoder,
            Platform::Codeforces => self.codeforces,
            Platform::CodeChef => self.codechef,
        }
    }
}

fn load_error(platform: Platform) -> String {
    format!("Failed to load {} ratings. Is backend running?", platform.label())
}

#[component]
pub fn OverallStandings() -> impl IntoView {
    let active = RwSignal::new(Platform::Codeforces);
    let slots = Slots::new();
    let message_idx = RwSignal::new(0usize);

    // Holds on the last message once the list is exhausted
    use_interval_fn(
        move || message_idx.update(|i| *i = (*i + 1).min(LOADING_MESSAGES.len() - 1)),
        LOADING_MESSAGE_INTERVAL.as_millis() as u64,
    );

    Effect::new(move |_| {
        let platform = active.get();
        let slot = slots.get(platform);
        if !matches!(slot.get_untracked(), Standings::Idle | Standings::Failed) {
            return;
        }
        slot.set(Standings::Loading);
        message_idx.set(0);
        spawn_local(async move {
            let client = BackendClient::default();
            let next = match fetch_ratings(&client, platform).await {
                Ok(data) => Standings::Ready(overall_standings(platform, &data)),
                Err(e) => {
                    log::error!("{platform} ratings load error: {e}");
                    Standings::Failed
                }
            };
            slot.set(next);
        });
    });

    let loading_message = Signal::derive(move || {
        LOADING_MESSAGES
            .get(message_idx.get())
            .copied()
            .unwrap_or_default()
            .to_string()
    });
    let tabs = Platform::ALL.iter().map(|p| (*p, p.label())).collect::<Vec<_>>();

    view! {
        <div class="max-w-6xl mx-auto px-4 py-10">
            <PageHeader title="Overall Standings" subtitle=INSTITUTION />
            <TabBar options=tabs active />
            {move || {
                let platform = active.get();
                match slots.get(platform).get() {
                    Standings::Idle | Standings::Loading => {
                        view! { <LoadingBox message=loading_message /> }.into_any()
                    }
                    Standings::Failed => {
                        view! {
                            <div class="flex items-center justify-center gap-2 py-10 text-red-600 font-medium">
                                <Icon icon=icondata::FiAlertTriangle />
                                {load_error(platform)}
                            </div>
                        }
                            .into_any()
                    }
                    Standings::Ready(rows) => {
                        view! {
                            <RatingsTable
                                title=format!("{} Standings", platform.label())
                                platform
                                rows
                            />
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_the_platform() {
        assert_eq!(
            load_error(Platform::CodeChef),
            "Failed to load CodeChef ratings. Is backend running?"
        );
    }
}

use leptos::prelude::*;

/// Row of buttons selecting one of `options`
#[component]
pub fn TabBar<T>(options: Vec<(T, &'static str)>, active: RwSignal<T>) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="flex flex-wrap justify-center gap-2 mb-6" role="tablist">
            {options
                .into_iter()
                .map(|(value, label)| {
                    let selected = move || active.get() == value;
                    view! {
                        <button
                            role="tab"
                            aria-selected=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "px-4 py-2 rounded-lg font-semibold bg-sky-700 text-white shadow"
                                } else {
                                    "px-4 py-2 rounded-lg font-semibold bg-white text-sky-800 border border-sky-200 hover:bg-sky-50"
                                }
                            }
                            on:click=move |_| active.set(value)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-6">
            <div
                class="w-10 h-10 rounded-full border-4 border-sky-200 border-t-sky-700 animate-spin"
                role="status"
                aria-label="loading"
            />
        </div>
    }
}

/// Spinner with a status line underneath
#[component]
pub fn LoadingBox(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3 py-10 text-neutral-600">
            <Spinner />
            <div class="text-sm font-medium">{move || message.get()}</div>
        </div>
    }
}

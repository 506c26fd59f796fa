use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="flex flex-col items-center justify-center gap-4 py-24 text-center">
            <h1 class="text-5xl font-bold text-sky-900">"404"</h1>
            <p class="text-neutral-600">"The page you are looking for does not exist."</p>
            <A href="/" attr:class="text-sky-700 font-semibold underline">
                "Back to Home"
            </A>
        </div>
    }
}

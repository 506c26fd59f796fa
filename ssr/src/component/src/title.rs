use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="text-center mb-8">
            <h1 class="text-3xl md:text-4xl font-bold text-sky-900">{title}</h1>
            {subtitle.map(|s| view! { <p class="mt-2 text-neutral-600">{s}</p> })}
        </header>
    }
}

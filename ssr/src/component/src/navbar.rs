use consts::SITE_NAME;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_router::components::A;

const DESKTOP_LINKS: [(&str, &str); 7] = [
    ("/", "Home"),
    ("/standings/overall", "Contestants"),
    ("/standings/contest", "Contests"),
    ("/report-cheater", "Report"),
    ("/register", "Register"),
    ("/hall-of-shame", "HallOfShame"),
    ("/about", "About"),
];

const MOBILE_LINKS: [(&str, &str); 7] = [
    ("/", "Home"),
    ("/standings/overall", "Overall"),
    ("/standings/contest", "Contest Search"),
    ("/report-cheater", "Report Cheater"),
    ("/register", "Register"),
    ("/hall-of-shame", "Hall of Shame"),
    ("/about", "About"),
];

fn nav_links(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    links
        .iter()
        .map(|(href, label)| {
            view! {
                <A href=*href attr:class="px-3 py-2 rounded-md text-sm font-medium text-sky-900 hover:bg-sky-50 aria-[current=page]:bg-sky-100">
                    {*label}
                </A>
            }
        })
        .collect_view()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/95 backdrop-blur border-b border-sky-100 shadow-sm">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-4 h-16">
                <div on:click=move |_| open.set(false)>
                    <A href="/" attr:class="flex items-center gap-2" attr:aria-label="Competitive Programming AUST Home">
                        <img src="/favicon.ico" alt="logo" class="w-8 h-8" />
                        <span class="text-lg font-bold text-sky-900">{SITE_NAME}</span>
                    </A>
                </div>
                <nav class="hidden md:flex items-center gap-1">{nav_links(&DESKTOP_LINKS)}</nav>
                <button
                    class="md:hidden p-2 text-sky-900"
                    aria-label="Toggle menu"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <Icon icon=icondata::FiMenu width="26" height="26" />
                </button>
            </div>
            <Show when=move || open.get()>
                <div
                    class="md:hidden flex flex-col gap-1 px-4 pb-4 border-t border-sky-100"
                    on:click=move |_| open.set(false)
                >
                    {nav_links(&MOBILE_LINKS)}
                </div>
            </Show>
        </header>
        <div class="h-16" />
    }
}

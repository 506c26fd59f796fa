use component::{footer::Footer, navbar::Navbar};
use consts::SITE_TITLE;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use page::{
    about::About, contest_search::ContestSearch, hall_of_shame::HallOfShame, home::Home,
    not_found::NotFound, overall::OverallStandings, register::Register, report::ReportCheater,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-neutral-50 text-neutral-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/aust-cp-standings.css" />
        <Title text=SITE_TITLE />
        <Meta
            name="description"
            content="Ratings, contest standings and upcoming contests for AUST competitive programmers"
        />

        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/standings/overall") view=OverallStandings />
                    <Route path=path!("/standings/contest") view=ContestSearch />
                    <Route path=path!("/report-cheater") view=ReportCheater />
                    <Route path=path!("/register") view=Register />
                    <Route path=path!("/hall-of-shame") view=HallOfShame />
                    <Route path=path!("/about") view=About />
                    // legacy paths
                    <Route
                        path=path!("/overall-standings")
                        view=|| view! { <Redirect path="/standings/overall" /> }
                    />
                    <Route
                        path=path!("/contest-search")
                        view=|| view! { <Redirect path="/standings/contest" /> }
                    />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

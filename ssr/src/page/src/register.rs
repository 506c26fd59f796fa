use component::forms::register::RegisterForm;
use component::tabs::TabBar;
use component::title::PageHeader;
use leptos::prelude::*;
use leptos_icons::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Instructions,
    Form,
}

#[component]
fn Instructions(#[prop(into)] open_form: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 text-neutral-700">
            <div class="flex items-center gap-3">
                <Icon icon=icondata::FiUserPlus width="28" height="28" />
                <div>
                    <h2 class="text-2xl font-bold text-sky-900">"Registration Instructions"</h2>
                    <p class="text-sm text-amber-700 font-medium">
                        "Only AUST students are eligible to register."
                    </p>
                </div>
            </div>
            <p>
                "If you're not appearing on the AUST leaderboard, follow one of the methods below to get listed:"
            </p>
            <section class="rounded-xl border border-sky-100 bg-sky-50/60 p-5">
                <h3 class="font-semibold text-sky-900 mb-2">"Preferred Method — Auto Listing"</h3>
                <p class="mb-2">
                    "Update your Organization / Affiliation field in each platform's settings as follows:"
                </p>
                <ul class="list-disc pl-6 space-y-1">
                    <li>"Codeforces: Set organization to " <strong>"AUST"</strong> "."</li>
                    <li>
                        "CodeChef: Set institute to "
                        <strong>"Ahsanullah University of Science and Technology"</strong> "."
                    </li>
                    <li>"AtCoder: Set affiliation to " <strong>"AUST"</strong> "."</li>
                </ul>
                <p class="mt-2 text-sm">
                    "This is the fastest and most accurate way. Your name will be automatically detected and appear on the leaderboard."
                </p>
            </section>
            <section class="rounded-xl border border-neutral-200 p-5">
                <h3 class="font-semibold text-sky-900 mb-2">"Alternative Method — Registration"</h3>
                <p>
                    "If you're unable to update organization info, you may submit the form manually with your correct details. Our team will verify and list you."
                </p>
            </section>
            <section>
                <h3 class="flex items-center gap-2 font-semibold text-sky-900 mb-2">
                    <Icon icon=icondata::FiLock />
                    "Privacy & Usage"
                </h3>
                <p>
                    "Your data will be used only for leaderboard tracking and academic coordination. No personal information will be shared or misused."
                </p>
            </section>
            <button
                class="self-start inline-flex items-center gap-2 px-5 py-2 rounded-lg bg-sky-700 text-white font-semibold hover:bg-sky-800"
                on:click=move |_| open_form.run(())
            >
                <Icon icon=icondata::FiEdit />
                "Go to Registration Form"
            </button>
        </div>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let tab = RwSignal::new(Tab::Instructions);

    view! {
        <div class="max-w-3xl mx-auto px-4 py-10">
            <PageHeader title="Register" />
            <TabBar
                options=vec![(Tab::Instructions, "Instructions"), (Tab::Form, "Registration Form")]
                active=tab
            />
            <div class="rounded-2xl bg-white shadow p-6">
                {move || match tab.get() {
                    Tab::Instructions => {
                        view! { <Instructions open_form=move |_| tab.set(Tab::Form) /> }.into_any()
                    }
                    Tab::Form => view! { <RegisterForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

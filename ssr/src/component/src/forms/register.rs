use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use utils::forms::{FormKind, FormStatus, RegistrationForm, RelayForm};

use super::{bind_field, settle, submit_registration, Field, StatusLine};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let status = RwSignal::new(None::<FormStatus>);

    let submit = Action::new(move |form: &RegistrationForm| {
        let form = form.clone();
        async move { submit_registration(form).await }
    });
    let pending = submit.pending();

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            let next = settle(FormKind::Registration, result);
            if next.ok {
                form.set(RegistrationForm::default());
            }
            status.set(Some(next));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            status.set(Some(FormStatus::invalid(e)));
            return;
        }
        status.set(None);
        submit.dispatch(current);
    };

    let (full_name, set_full_name) = bind_field!(form, full_name);
    let (semester, set_semester) = bind_field!(form, semester);
    let (email, set_email) = bind_field!(form, email);
    let (codeforces, set_codeforces) = bind_field!(form, codeforces);
    let (codechef, set_codechef) = bind_field!(form, codechef);
    let (atcoder, set_atcoder) = bind_field!(form, atcoder);

    view! {
        <form
            on:submit=on_submit
            novalidate=true
            class="w-full max-w-2xl mx-auto bg-white rounded-xl shadow p-6 flex flex-col gap-4"
        >
            <h2 class="text-xl font-bold text-sky-900 text-center">"Register (AUST Only)"</h2>
            <div class="grid md:grid-cols-2 gap-4">
                <Field label="Full Name" id="rfm-fullName" required=true placeholder="Your full name" value=full_name on_input=set_full_name />
                <Field label="Semester" id="rfm-semester" required=true placeholder="E.g. 1.1" value=semester on_input=set_semester />
            </div>
            <Field label="Email" id="rfm-email" required=true kind="email" placeholder="your.email@example.com" value=email on_input=set_email />
            <div class="grid md:grid-cols-2 gap-4">
                <Field label="Codeforces Handle" id="rfm-codeforces" placeholder="Optional" value=codeforces on_input=set_codeforces />
                <Field label="CodeChef Handle" id="rfm-codechef" placeholder="Optional" value=codechef on_input=set_codechef />
            </div>
            <Field label="AtCoder Handle" id="rfm-atcoder" placeholder="Optional" value=atcoder on_input=set_atcoder />
            <StatusLine status />
            <div class="flex justify-end gap-3">
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-amber-400 text-amber-800 hover:bg-amber-50"
                    on:click=move |_| {
                        form.set(RegistrationForm::default());
                        status.set(None);
                    }
                >
                    "Reset"
                </button>
                <button
                    type="submit"
                    class="px-5 py-2 rounded-lg bg-sky-700 text-white font-semibold hover:bg-sky-800 disabled:opacity-60"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Register" }}
                </button>
            </div>
        </form>
    }
}

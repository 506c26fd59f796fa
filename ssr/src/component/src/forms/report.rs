use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use utils::forms::{CheaterReport, FormKind, FormStatus, RelayForm};
use utils::profile::Platform;

use super::{bind_field, settle, submit_report, Field, StatusLine};

#[component]
pub fn ReportForm() -> impl IntoView {
    let report = RwSignal::new(CheaterReport::default());
    let status = RwSignal::new(None::<FormStatus>);

    let submit = Action::new(move |report: &CheaterReport| {
        let report = report.clone();
        async move { submit_report(report).await }
    });
    let pending = submit.pending();

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            let next = settle(FormKind::Report, result);
            if next.ok {
                report.set(CheaterReport::default());
            }
            status.set(Some(next));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = report.get_untracked();
        if let Err(e) = current.validate() {
            status.set(Some(FormStatus::invalid(e)));
            return;
        }
        status.set(None);
        submit.dispatch(current);
    };

    let (reporter_name, set_reporter_name) = bind_field!(report, reporter_name);
    let (reporter_email, set_reporter_email) = bind_field!(report, reporter_email);
    let (cheater_handle, set_cheater_handle) = bind_field!(report, cheater_handle);
    let (contest_id, set_contest_id) = bind_field!(report, contest_id);
    let (evidence_link, set_evidence_link) = bind_field!(report, evidence_link);
    let (evidence, set_evidence) = bind_field!(report, evidence);

    view! {
        <form
            on:submit=on_submit
            novalidate=true
            class="w-full max-w-2xl mx-auto bg-white rounded-xl shadow p-6 flex flex-col gap-4"
        >
            <h2 class="text-xl font-bold text-sky-900 text-center">"Report a Cheater"</h2>
            <Field label="Reporter Name" id="rf-reporterName" required=true value=reporter_name on_input=set_reporter_name />
            <Field label="Reporter Email" id="rf-reporterEmail" required=true kind="email" value=reporter_email on_input=set_reporter_email />
            <Field label="Cheater Handle" id="rf-cheaterHandle" required=true value=cheater_handle on_input=set_cheater_handle />
            <div class="flex flex-col gap-1">
                <label for="rf-platform" class="text-sm font-medium text-neutral-700">"Platform *"</label>
                <select
                    id="rf-platform"
                    class="w-full px-3 py-2 rounded-lg border border-neutral-300 bg-white"
                    prop:value=move || report.with(|r| r.platform.label())
                    on:change=move |ev| {
                        if let Some(platform) = Platform::from_label(&event_target_value(&ev)) {
                            report.update(|r| r.platform = platform);
                        }
                    }
                >
                    {Platform::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.label()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Field label="Contest ID" id="rf-contestId" required=true value=contest_id on_input=set_contest_id />
            <Field label="Evidence Link (optional)" id="rf-evidenceLink" value=evidence_link on_input=set_evidence_link />
            <Field
                label="Details (optional)"
                id="rf-evidence"
                multiline=true
                placeholder="Describe the suspicious behavior, evidence, or context..."
                value=evidence
                on_input=set_evidence
            />
            <StatusLine status />
            <div class="flex justify-end gap-3">
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-amber-400 text-amber-800 hover:bg-amber-50"
                    on:click=move |_| {
                        report.set(CheaterReport::default());
                        status.set(None);
                    }
                >
                    "Reset"
                </button>
                <button
                    type="submit"
                    class="px-5 py-2 rounded-lg bg-red-700 text-white font-semibold hover:bg-red-800 disabled:opacity-60"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit Report" }}
                </button>
            </div>
        </form>
    }
}

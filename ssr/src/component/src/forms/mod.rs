pub mod register;
pub mod report;

use leptos::prelude::*;
use leptos::server;
use utils::forms::{CheaterReport, FormStatus, RegistrationForm, RelayOutcome};

/// A read signal and write callback for one `String` field of a form signal
macro_rules! bind_field {
    ($form:expr, $field:ident) => {{
        let form = $form;
        (
            Signal::derive(move || form.with(|f| f.$field.clone())),
            Callback::new(move |value: String| form.update(|f| f.$field = value)),
        )
    }};
}
pub(crate) use bind_field;

#[cfg(feature = "ssr")]
async fn relay_form<F: utils::forms::RelayForm>(form: F) -> Result<RelayOutcome, ServerFnError> {
    use state::relay::FormRelay;

    form.validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let relay = use_context::<FormRelay>()
        .ok_or_else(|| ServerFnError::new("form relay is not configured"))?;
    relay.submit(&form).await.map_err(|e| {
        log::error!("failed to relay {:?} form: {e}", F::KIND);
        ServerFnError::new(e.to_string())
    })
}

#[server]
pub async fn submit_registration(form: RegistrationForm) -> Result<RelayOutcome, ServerFnError> {
    relay_form(form).await
}

#[server]
pub async fn submit_report(report: CheaterReport) -> Result<RelayOutcome, ServerFnError> {
    relay_form(report).await
}

#[component]
pub(crate) fn Field(
    label: &'static str,
    id: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let label = if required { format!("{label} *") } else { label.to_string() };
    let class = "w-full px-3 py-2 rounded-lg border border-neutral-300 focus:outline-none focus:border-sky-600";

    view! {
        <div class="flex flex-col gap-1">
            <label for=id class="text-sm font-medium text-neutral-700">{label}</label>
            {if multiline {
                view! {
                    <textarea
                        id=id
                        rows="4"
                        class=class
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                }
                    .into_any()
            } else {
                view! {
                    <input
                        id=id
                        type=kind
                        class=class
                        placeholder=placeholder
                        required=required
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
pub(crate) fn StatusLine(status: RwSignal<Option<FormStatus>>) -> impl IntoView {
    move || {
        status.get().map(|s| {
            let class = if s.ok {
                "rounded-lg px-3 py-2 text-sm bg-emerald-50 text-emerald-800"
            } else {
                "rounded-lg px-3 py-2 text-sm bg-red-50 text-red-800"
            };
            view! { <div class=class>{s.message}</div> }
        })
    }
}

/// Folds a finished server call into the status line
pub(crate) fn settle(
    kind: utils::forms::FormKind,
    result: Result<RelayOutcome, ServerFnError>,
) -> FormStatus {
    match result {
        Ok(outcome) => FormStatus::from_outcome(kind, outcome),
        Err(e) => {
            log::error!("{kind:?} submission failed: {e}");
            FormStatus::unreachable()
        }
    }
}

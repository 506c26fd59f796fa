use leptos::portal::Portal;
use leptos::prelude::*;
use leptos_icons::*;

/// Overlay dialog; clicking the backdrop closes it
#[component]
pub fn Modal(
    #[prop(into)] show: RwSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = StoredValue::new(title);

    view! {
        <Show when=move || show.get()>
            <Portal>
                <div
                    on:click={
                        #[cfg(feature = "hydrate")]
                        {
                            move |ev| {
                                use web_sys::HtmlElement;
                                let target = event_target::<HtmlElement>(&ev);
                                if target.class_list().contains("modal-bg") {
                                    show.set(false);
                                }
                            }
                        }
                        #[cfg(not(feature = "hydrate"))] { |_| () }
                    }
                    class="flex modal-bg inset-0 fixed bg-black/50 z-[999] justify-center items-center backdrop-blur-sm"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="mx-4 p-5 w-full max-w-2xl max-h-[80vh] overflow-y-auto flex flex-col gap-4 bg-white rounded-xl shadow-xl">
                        <div class="flex w-full justify-between items-center">
                            <h2 class="text-lg font-bold text-sky-900">
                                {title.get_value().unwrap_or_default()}
                            </h2>
                            <button
                                on:click=move |_| show.set(false)
                                class="p-1 text-lg text-neutral-600 hover:text-neutral-900 rounded-full"
                                aria-label="Close"
                            >
                                <Icon icon=icondata::ChCross />
                            </button>
                        </div>
                        <div class="w-full">{children.with_value(|c| c())}</div>
                        <div class="flex justify-end">
                            <button
                                on:click=move |_| show.set(false)
                                class="px-4 py-2 rounded-lg border border-neutral-300 text-neutral-700 hover:bg-neutral-100"
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Portal>
        </Show>
    }
}

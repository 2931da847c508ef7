use crate::components::confirm_dialog::ConfirmDialog;
use leptos::*;

/// Manual trigger for moving legacy completion data into the current format.
#[component]
pub fn MigrationHelper(
    confirm_open: Signal<bool>,
    pending: Signal<bool>,
    status: Signal<Option<Result<String, String>>>,
    on_request: Callback<()>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-yellow-50 border border-yellow-200 rounded-lg p-6">
            <h2 class="text-lg font-semibold text-gray-900">"One-Time Data Migration"</h2>
            <p class="mt-1 text-sm text-gray-600">
                "If your habits were created before completion history was tracked per day, run this once to move your existing records."
            </p>
            <button
                type="button"
                class="mt-4 inline-flex items-center px-4 py-2 rounded-md text-sm font-medium text-white bg-yellow-600 hover:bg-yellow-700 disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| on_request.call(())
            >
                {move || if pending.get() { "Migrating..." } else { "Migrate Completion Data" }}
            </button>
            {move || {
                status
                    .get()
                    .map(|outcome| {
                        let (class, message) = match outcome {
                            Ok(message) => ("mt-3 text-sm text-green-700", message),
                            Err(message) => ("mt-3 text-sm text-red-700", message),
                        };
                        view! { <p class=class>{message}</p> }
                    })
            }}
            <ConfirmDialog
                is_open=confirm_open
                title="Migrate completion data"
                message="This converts your existing completion records. It only needs to run once. Continue?"
                confirm_label="Migrate"
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}

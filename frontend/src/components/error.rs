use leptos::*;

/// Inline form error; stays visible until the owning form clears it.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded my-2" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "block w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm";

#[component]
pub fn LoginForm(
    email: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <div>
                <label for="email" class="block text-sm font-medium text-gray-700">"Email Address"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required
                    class=INPUT_CLASS
                    prop:value=email
                    on:input=move |ev| on_email_input.call(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    required
                    class=INPUT_CLASS
                    prop:value=password
                    on:input=move |ev| on_password_input.call(event_target_value(&ev))
                />
            </div>

            <InlineErrorMessage error=error />

            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
            >
                {move || if pending.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

use crate::{components::error::InlineErrorMessage, pages::register::utils::MIN_PASSWORD_LEN};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "block w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm disabled:bg-gray-100";

#[component]
pub fn RegisterForm(
    name: Signal<String>,
    email: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_name_input: Callback<String>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <InlineErrorMessage error=error />
            <div>
                <label for="name" class="block text-sm font-medium text-gray-700">"Name"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    required
                    class=INPUT_CLASS
                    disabled=move || pending.get()
                    prop:value=name
                    on:input=move |ev| on_name_input.call(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="email" class="block text-sm font-medium text-gray-700">"Email Address"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required
                    class=INPUT_CLASS
                    disabled=move || pending.get()
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
                    minlength=MIN_PASSWORD_LEN.to_string()
                    class=INPUT_CLASS
                    disabled=move || pending.get()
                    prop:value=password
                    on:input=move |ev| on_password_input.call(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
            >
                {move || if pending.get() { "Creating Account..." } else { "Create Account" }}
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_form_shows_pending_label() {
        let html = render_to_string(|| {
            view! {
                <RegisterForm
                    name=Signal::derive(String::new)
                    email=Signal::derive(String::new)
                    password=Signal::derive(String::new)
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| true)
                    on_name_input=Callback::new(|_| {})
                    on_email_input=Callback::new(|_| {})
                    on_password_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Creating Account..."));
        assert!(html.contains("minlength=\"6\""));
    }
}

use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use crate::state::session::REGISTER_PATH;
use leptos::{ev::SubmitEvent, Callback, *};
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    let email_input = Callback::new(move |value: String| {
        vm.error.set(None);
        vm.form.email.set(value);
    });
    let password_input = Callback::new(move |value: String| {
        vm.error.set(None);
        vm.form.password.set(value);
    });

    view! {
        <Title text="Login | HabitTracker"/>
        <div class="max-w-md mx-auto py-12 space-y-6">
            <h2 class="text-center text-3xl font-extrabold text-gray-900">
                "Login to Your Account"
            </h2>
            <LoginForm
                email=vm.form.email.into()
                password=vm.form.password.into()
                error=vm.error.into()
                pending=pending.into()
                on_email_input=email_input
                on_password_input=password_input
                on_submit=handle_submit
            />
            <p class="text-center text-sm text-gray-600">
                "Don't have an account? "
                <a href=REGISTER_PATH class="text-indigo-600 hover:underline">"Register here"</a>
            </p>
        </div>
    }
}

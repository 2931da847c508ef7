use crate::pages::register::{components::form::RegisterForm, view_model::use_register_view_model};
use crate::state::session::LOGIN_PATH;
use leptos::{ev::SubmitEvent, Callback, *};
use leptos_meta::Title;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.register_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    let field_input = move |field: RwSignal<String>| {
        Callback::new(move |value: String| {
            vm.error.set(None);
            field.set(value);
        })
    };

    view! {
        <Title text="Register | HabitTracker"/>
        <div class="max-w-md mx-auto py-12 space-y-6">
            <h2 class="text-center text-3xl font-extrabold text-gray-900">
                "Create a New Account"
            </h2>
            <RegisterForm
                name=vm.form.name.into()
                email=vm.form.email.into()
                password=vm.form.password.into()
                error=vm.error.into()
                pending=pending.into()
                on_name_input=field_input(vm.form.name)
                on_email_input=field_input(vm.form.email)
                on_password_input=field_input(vm.form.password)
                on_submit=handle_submit
            />
            <p class="text-center text-sm text-gray-600">
                "Already have an account? "
                <a href=LOGIN_PATH class="text-indigo-600 hover:underline">"Login here"</a>
            </p>
        </div>
    }
}

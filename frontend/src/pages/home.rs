use crate::state::session::{LOGIN_PATH, REGISTER_PATH};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="HabitTracker"/>
        <div class="max-w-3xl mx-auto py-12 px-4 text-center">
            <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl">
                "Welcome to HabitTracker"
            </h1>
            <p class="mt-3 text-base text-gray-600 sm:text-lg">
                "Your personal tool to build better habits and visualize your progress."
            </p>
            <p class="mt-8 text-gray-700">"Ready to get started?"</p>
            <div class="mt-4 flex justify-center gap-3">
                <a href=REGISTER_PATH class="px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 font-medium">
                    "Create an Account"
                </a>
                <a href=LOGIN_PATH class="px-6 py-3 rounded-md text-indigo-700 bg-indigo-50 hover:bg-indigo-100 font-medium">
                    "Login"
                </a>
            </div>
        </div>
    }
}

use crate::state::{
    auth::use_session,
    session::{DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH},
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let auth = session.state();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());

    let on_logout = move |_| session.logout();

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=HOME_PATH class="text-xl font-semibold text-indigo-600">
                        "HabitTracker"
                    </a>
                    <nav class="flex items-center space-x-2">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=|| view! {
                                <a href=LOGIN_PATH class=NAV_LINK_CLASS>"Login"</a>
                                <a href=REGISTER_PATH class=NAV_LINK_CLASS>"Register"</a>
                            }
                        >
                            <a href=DASHBOARD_PATH class=NAV_LINK_CLASS>"Dashboard"</a>
                            <button type="button" class=NAV_LINK_CLASS on:click=on_logout>
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Navbar/>
            <main class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

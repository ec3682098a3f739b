use crate::{
    api::ApiClient,
    components::sidebar::Sidebar,
    router::LOGIN_PATH,
    state::{
        auth::use_logout,
        layout::{provide_layout_state, LayoutState},
    },
};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, Outlet};

/// Route component for everything under `/dashboard`. Owns the sidebar state
/// so it survives navigation between child pages.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let layout = provide_layout_state();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let offices = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                let result = api.list_offices().await;
                if let Err(err) = &result {
                    log::error!("Failed to load offices: {}", err);
                }
                result
            }
        },
    );

    #[cfg(target_arch = "wasm32")]
    {
        let handle = window_event_listener(ev::resize, move |_| {
            layout.handle_resize(crate::state::layout::viewport_width())
        });
        on_cleanup(move || handle.remove());
    }

    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());
    let logout = use_logout();
    let navigate = use_navigate();
    let on_logout = Callback::new(move |_| {
        logout.call(());
        navigate(
            LOGIN_PATH,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="min-h-screen bg-surface text-fg">
            <Sidebar
                layout=layout
                pathname=pathname
                offices=Signal::derive(move || offices.get())
                on_logout=on_logout
            />
            <ContentArea layout=layout>
                <Outlet/>
            </ContentArea>
        </div>
    }
}

#[component]
pub fn ContentArea(layout: LayoutState, children: Children) -> impl IntoView {
    let margin = layout.content_margin();
    view! {
        <main
            class="min-h-screen transition-all duration-300 p-4 pt-16 lg:p-8"
            style=move || format!("margin-left: {}px;", margin.get())
        >
            {children()}
        </main>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

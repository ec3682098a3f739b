use crate::{
    api::{encode_segment, ApiError, Office},
    components::theme::ThemeToggle,
    router::{DASHBOARD_PATH, SEARCH_PATH},
    state::layout::LayoutState,
};
use leptos::*;

type OfficesState = Option<Result<Vec<Office>, ApiError>>;

pub fn office_href(office_id: &str) -> String {
    format!("{}/office/{}", DASHBOARD_PATH, encode_segment(office_id))
}

pub fn is_active(pathname: &str, href: &str) -> bool {
    let normalized = pathname.trim_end_matches('/');
    let normalized = if normalized.is_empty() { "/" } else { normalized };
    normalized == href
}

pub fn nav_item_class(active: bool, collapsed: bool) -> String {
    let base = "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium transition-colors";
    let state = if active {
        "bg-action-primary-bg text-action-primary-text"
    } else {
        "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    };
    let align = if collapsed { "justify-center" } else { "" };
    format!("{} {} {}", base, state, align).trim_end().to_string()
}

#[component]
fn NavLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    icon: &'static str,
    pathname: Signal<String>,
    collapsed: Signal<bool>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    let target = href.clone();
    let title = label.clone();
    view! {
        <a
            href=href
            title=title
            class=move || nav_item_class(is_active(&pathname.get(), &target), collapsed.get())
            on:click=move |_| on_navigate.call(())
        >
            <i class=format!("fas {} w-5 text-center", icon)></i>
            <Show when=move || !collapsed.get()>
                <span>{label.clone()}</span>
            </Show>
        </a>
    }
}

#[component]
fn OfficeLinks(
    offices: Signal<OfficesState>,
    pathname: Signal<String>,
    collapsed: Signal<bool>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    let hint_class = "px-3 py-2 text-xs text-fg-muted";
    move || match offices.get() {
        None => view! { <p class=hint_class>"Loading..."</p> }.into_view(),
        Some(Err(_)) => view! {
            <p class="px-3 py-2 text-xs text-status-error-text">"Failed to load offices"</p>
        }
        .into_view(),
        Some(Ok(list)) if list.is_empty() => {
            view! { <p class=hint_class>"No offices"</p> }.into_view()
        }
        Some(Ok(list)) => list
            .into_iter()
            .map(|office| {
                view! {
                    <NavLink
                        href=office_href(&office.id)
                        label=office.name
                        icon="fa-building"
                        pathname=pathname
                        collapsed=collapsed
                        on_navigate=on_navigate
                    />
                }
            })
            .collect_view(),
    }
}

#[component]
fn SidebarContent(
    layout: LayoutState,
    collapsed: Signal<bool>,
    pathname: Signal<String>,
    offices: Signal<OfficesState>,
    on_navigate: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col">
            <div class="flex h-16 items-center justify-between border-b border-border px-4">
                <Show when=move || !collapsed.get()>
                    <span class="text-lg font-semibold text-fg">"AssetFlow"</span>
                </Show>
                <Show when=move || !layout.is_mobile.get()>
                    <button
                        type="button"
                        class="rounded-md p-2 text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        aria-label="Toggle sidebar"
                        on:click=move |_| layout.toggle_collapsed()
                    >
                        <i class=move || {
                            if collapsed.get() { "fas fa-angle-double-right" } else { "fas fa-angle-double-left" }
                        }></i>
                    </button>
                </Show>
            </div>
            <nav class="flex-1 space-y-1 overflow-y-auto px-2 py-4">
                <NavLink
                    href=DASHBOARD_PATH
                    label="Dashboard"
                    icon="fa-chart-pie"
                    pathname=pathname
                    collapsed=collapsed
                    on_navigate=on_navigate
                />
                <Show when=move || !collapsed.get()>
                    <p class="px-3 pt-4 pb-1 text-xs font-semibold uppercase tracking-wider text-fg-muted">
                        "Offices"
                    </p>
                </Show>
                <OfficeLinks
                    offices=offices
                    pathname=pathname
                    collapsed=collapsed
                    on_navigate=on_navigate
                />
                <div class="pt-4">
                    <NavLink
                        href=SEARCH_PATH
                        label="Global Search"
                        icon="fa-search"
                        pathname=pathname
                        collapsed=collapsed
                        on_navigate=on_navigate
                    />
                </div>
            </nav>
            <div class="flex items-center justify-between gap-2 border-t border-border p-4">
                <ThemeToggle/>
                <button
                    type="button"
                    class="flex items-center gap-2 rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_logout.call(())
                >
                    <i class="fas fa-sign-out-alt"></i>
                    <Show when=move || !collapsed.get()>
                        <span>"Logout"</span>
                    </Show>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar(
    layout: LayoutState,
    pathname: Signal<String>,
    offices: Signal<OfficesState>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let desktop_collapsed = Signal::derive(move || layout.collapsed.get());
    // The drawer always shows labels.
    let drawer_collapsed = Signal::derive(|| false);
    let close_drawer = Callback::new(move |_| layout.close_mobile());
    let keep_open = Callback::new(|_| {});

    view! {
        <Show
            when=move || layout.is_mobile.get()
            fallback=move || view! {
                <aside class=move || {
                    format!(
                        "fixed inset-y-0 left-0 z-30 border-r border-border bg-surface-elevated transition-all duration-300 {}",
                        if desktop_collapsed.get() { "w-16" } else { "w-64" }
                    )
                }>
                    <SidebarContent
                        layout=layout
                        collapsed=desktop_collapsed
                        pathname=pathname
                        offices=offices
                        on_navigate=keep_open
                        on_logout=on_logout
                    />
                </aside>
            }
        >
            <button
                type="button"
                class="fixed top-4 left-4 z-40 rounded-md bg-surface-elevated p-2 text-fg shadow"
                aria-label="Open menu"
                aria-expanded=move || layout.mobile_open.get()
                on:click=move |_| layout.toggle_mobile()
            >
                <i class="fas fa-bars"></i>
            </button>
            <Show when=move || layout.mobile_open.get()>
                <div
                    class="fixed inset-0 z-40 bg-overlay-backdrop"
                    on:click=move |_| layout.close_mobile()
                ></div>
            </Show>
            <aside class=move || {
                format!(
                    "fixed inset-y-0 left-0 z-50 w-64 border-r border-border bg-surface-elevated transition-transform duration-300 {}",
                    if layout.mobile_open.get() { "translate-x-0" } else { "-translate-x-full" }
                )
            }>
                <SidebarContent
                    layout=layout
                    collapsed=drawer_collapsed
                    pathname=pathname
                    offices=offices
                    on_navigate=close_drawer
                    on_logout=on_logout
                />
            </aside>
        </Show>
    }
}

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RedirectIfSession, RequireSession},
        layout::DashboardLayout,
        theme::ThemeProvider,
    },
    pages::{
        dashboard::DashboardPage, login::LoginPage, office::OfficePage, register::RegisterPage,
        search::GlobalSearchPage,
    },
    state::{auth::AuthProvider, session::SessionStore},
    utils::storage::default_store,
};

pub const LOGIN_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SEARCH_PATH: &str = "/dashboard/search";

pub const ROUTE_PATHS: &[&str] = &[
    LOGIN_PATH,
    REGISTER_PATH,
    DASHBOARD_PATH,
    "/dashboard/office/:id",
    SEARCH_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[DASHBOARD_PATH, "/dashboard/office/:id", SEARCH_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[LOGIN_PATH, REGISTER_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let session = SessionStore::browser();
    provide_context(session.clone());
    provide_context(ApiClient::with_session(session));
    view! {
        <Title formatter=|page: String| {
            if page.is_empty() { "AssetFlow".to_string() } else { format!("{} | AssetFlow", page) }
        }/>
        <ThemeProvider store=default_store()>
            <AuthProvider>
                <Router>
                    <Routes>
                        <Route path=LOGIN_PATH view=PublicLogin/>
                        <Route path=REGISTER_PATH view=PublicRegister/>
                        <Route path=DASHBOARD_PATH view=ProtectedLayout>
                            <Route path="" view=DashboardPage/>
                            <Route path="office/:id" view=OfficePage/>
                            <Route path="search" view=GlobalSearchPage/>
                        </Route>
                        <Route path="/*any" view=FallbackRedirect/>
                    </Routes>
                </Router>
            </AuthProvider>
        </ThemeProvider>
    }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <RedirectIfSession><LoginPage/></RedirectIfSession> }
}

#[component]
fn PublicRegister() -> impl IntoView {
    view! { <RedirectIfSession><RegisterPage/></RedirectIfSession> }
}

#[component]
fn ProtectedLayout() -> impl IntoView {
    view! { <RequireSession><DashboardLayout/></RequireSession> }
}

/// Unknown paths go to the dashboard; the session guard there bounces
/// signed-out users on to the login page.
#[component]
fn FallbackRedirect() -> impl IntoView {
    view! { <Redirect path=DASHBOARD_PATH/> }
}

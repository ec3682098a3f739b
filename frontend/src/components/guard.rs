use crate::{
    router::{DASHBOARD_PATH, LOGIN_PATH},
    state::{auth::use_auth, session::use_session_store},
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Protected,
    Public,
}

/// Where a route with `access` should send the user, if anywhere.
pub fn guard_redirect(access: RouteAccess, has_valid_token: bool) -> Option<&'static str> {
    match (access, has_valid_token) {
        (RouteAccess::Protected, false) => Some(LOGIN_PATH),
        (RouteAccess::Public, true) => Some(DASHBOARD_PATH),
        _ => None,
    }
}

fn session_guard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_session_store();
    // The auth signal changes on login/logout; storage holds the token.
    let has_token = create_memo(move |_| {
        auth.track();
        session.has_valid_token()
    });
    create_effect(move |_| {
        if let Some(target) = guard_redirect(access, has_token.get()) {
            let navigate = use_navigate();
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
    view! {
        <Show
            when=move || guard_redirect(access, has_token.get()).is_none()
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    session_guard(RouteAccess::Protected, children)
}

#[component]
pub fn RedirectIfSession(children: ChildrenFn) -> impl IntoView {
    session_guard(RouteAccess::Public, children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RedirectIfSession, RequireSession};
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_session_renders_children_with_valid_token() {
        let html = render_to_string(move || {
            provide_session(Some("abc.def"));
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_session_hides_children_for_placeholder_token() {
        let html = render_to_string(move || {
            provide_session(Some("undefined"));
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn redirect_if_session_hides_login_for_signed_in_user() {
        let html = render_to_string(move || {
            provide_session(Some("abc.def"));
            view! {
                <RedirectIfSession>
                    {|| view! { <div>"login-form"</div> }}
                </RedirectIfSession>
            }
        });
        assert!(!html.contains("login-form"));
    }

    #[test]
    fn redirect_if_session_shows_login_when_signed_out() {
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RedirectIfSession>
                    {|| view! { <div>"login-form"</div> }}
                </RedirectIfSession>
            }
        });
        assert!(html.contains("login-form"));
    }
}

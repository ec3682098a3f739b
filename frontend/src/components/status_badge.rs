use crate::api::AssetStatus;
use leptos::*;

pub fn status_badge_class(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "bg-status-success-bg text-status-success-text",
        AssetStatus::InRepair => "bg-status-warning-bg text-status-warning-text",
        AssetStatus::Inactive => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn AssetStatusBadge(status: AssetStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}",
            status_badge_class(status)
        )>
            {status.label()}
        </span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_uses_human_label() {
        let html = render_to_string(|| view! { <AssetStatusBadge status=AssetStatus::InRepair/> });
        assert!(html.contains("In Repair"));
        assert!(html.contains("bg-status-warning-bg"));
    }
}

use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let icon_class = format!("fas {} text-4xl text-fg-muted", icon.unwrap_or("fa-box-open"));
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <div class="mx-auto h-12 w-12 flex items-center justify-center">
                <i class=icon_class aria-hidden="true"></i>
            </div>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No assets found"
                    description="Add the first asset to this office."
                    icon="fa-search"
                />
            }
        });
        assert!(html.contains("No assets found"));
        assert!(html.contains("Add the first asset"));
        assert!(html.contains("fa-search"));
    }
}

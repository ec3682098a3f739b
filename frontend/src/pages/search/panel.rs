use crate::{
    api::{ApiClient, Asset},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
        search_input::SearchInput,
    },
    pages::search::{components::SearchResultsTable, repository::SearchRepository},
    state::search::{use_search_controller, SearchController, SearchPolicy},
};
use leptos::*;
use leptos_meta::Title;
use std::rc::Rc;

pub const SEARCH_FAILED: &str = "Could not connect to the server";

pub fn use_global_search() -> SearchController<Asset> {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = SearchRepository::new_with_client(Rc::new(api));
    use_search_controller(SearchPolicy::global(), move |term: String| {
        let repo = repository.clone();
        async move { repo.search_assets(&term).await }
    })
}

#[component]
pub fn GlobalSearchPage() -> impl IntoView {
    let search = use_global_search();

    view! {
        <Title text="Global Search"/>
        <div class="space-y-6">
            <h1 class="text-3xl font-extrabold text-fg">"Global Asset Search"</h1>
            <div class="w-full max-w-2xl mx-auto">
                <SearchInput
                    value=search.term()
                    on_input=Callback::new(move |term| search.on_input(term))
                    placeholder="Search by name, serial, inventory, status, or office..."
                    on_clear=Callback::new(move |_| search.clear())
                />
            </div>
            <div class="bg-surface-elevated rounded-lg p-6 shadow border border-border overflow-x-auto">
                <SearchResults search=search/>
            </div>
        </div>
    }
}

#[component]
fn SearchResults(search: SearchController<Asset>) -> impl IntoView {
    move || {
        if search.loading().get() {
            return view! { <LoadingSpinner/> }.into_view();
        }
        if search.error().get().is_some() {
            return view! { <ErrorMessage message=SEARCH_FAILED/> }.into_view();
        }
        let results = search.results().get();
        if !results.is_empty() {
            return view! { <SearchResultsTable results=results/> }.into_view();
        }
        if search.term().get().trim().is_empty() {
            view! {
                <EmptyState
                    title="Start typing to search assets"
                    description="Enter at least two characters."
                    icon="fa-search"
                />
            }
            .into_view()
        } else {
            view! {
                <EmptyState
                    title="No assets found matching your search criteria."
                    icon="fa-search"
                />
            }
            .into_view()
        }
    }
}

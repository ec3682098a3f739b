use leptos::*;

#[component]
pub fn SearchInput(
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <i class="fas fa-search pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted"></i>
            <input
                type="search"
                class="w-full rounded-md border border-border bg-surface-elevated py-2 pl-10 pr-10 text-sm text-fg placeholder-fg-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {on_clear.map(|clear| view! {
                <Show when=move || !value.get().is_empty()>
                    <button
                        type="button"
                        aria-label="Clear search"
                        class="absolute right-3 top-1/2 -translate-y-1/2 text-fg-muted hover:text-fg"
                        on:click=move |_| clear.call(())
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </Show>
            })}
        </div>
    }
}

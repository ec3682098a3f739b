use leptos::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md bg-surface-muted border border-border text-fg placeholder-fg-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

/// Centered card shared by the login and register screens.
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-sm rounded-xl border border-border bg-surface-elevated p-8 shadow-lg">
                <h2 class="text-center text-2xl font-bold tracking-wider text-fg mb-2">{title}</h2>
                <p class="text-center text-sm text-fg-muted mb-6">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|msg| view! { <p class="text-status-error-text text-xs mt-1">{msg}</p> })
    }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    view! {
        <div>
            <label for=id.clone() class="sr-only">{placeholder.clone()}</label>
            <input
                id=id
                type="text"
                autocomplete="username"
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

#[component]
pub fn PasswordInput(
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    view! {
        <div>
            <div class="relative">
                <label for="password" class="sr-only">"Password"</label>
                <input
                    id="password"
                    type=move || if visible.get() { "text" } else { "password" }
                    autocomplete="current-password"
                    class=format!("{} pr-10", INPUT_CLASS)
                    placeholder="Password"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-3 flex items-center text-fg-muted hover:text-fg"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    <i class=move || if visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                </button>
            </div>
            <FieldError error=error/>
        </div>
    }
}

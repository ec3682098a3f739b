use crate::{
    components::{
        auth_form::{AuthCard, PasswordInput, TextField},
        common::Button,
        error::InlineErrorMessage,
    },
    pages::login::view_model::use_login_view_model,
    router::REGISTER_PATH,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let form = vm.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <AuthCard title="LOGIN" subtitle="Enter your credentials">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    id="username"
                    placeholder="Username"
                    value=form.username.into()
                    on_input=Callback::new(move |value| form.username.set(value))
                    error=form.username_error()
                />
                <PasswordInput
                    value=form.password.into()
                    on_input=Callback::new(move |value| form.password.set(value))
                    error=form.password_error()
                />
                <InlineErrorMessage error=vm.error.into()/>
                <Button class="w-full" loading=pending attr:type="submit">
                    "Login"
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-fg-muted">
                "Don't have an account? "
                <a href=REGISTER_PATH class="text-action-primary-bg hover:underline">"Sign up"</a>
            </p>
        </AuthCard>
    }
}

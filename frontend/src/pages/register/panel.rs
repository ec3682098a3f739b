use crate::{
    components::{
        auth_form::{AuthCard, PasswordInput, TextField},
        common::Button,
        error::InlineErrorMessage,
        layout::SuccessMessage,
    },
    pages::register::view_model::use_register_view_model,
    router::LOGIN_PATH,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.register_action.pending();
    let form = vm.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <AuthCard title="REGISTER" subtitle="Create your account">
            {move || vm.success.get().map(|message| view! { <SuccessMessage message=message/> })}
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
                    "Sign up"
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-fg-muted">
                "Already have an account? "
                <a href=LOGIN_PATH class="text-action-primary-bg hover:underline">"Sign in"</a>
            </p>
        </AuthCard>
    }
}

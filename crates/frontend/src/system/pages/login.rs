use contracts::shared::alert::AlertInfo;
use contracts::system::auth::{authenticate, LoginError, LoginRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::shared::components::AlertBanner;
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::mount_guard::MountGuard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_login_view, set_is_login_view) = signal(true);
    let alert = RwSignal::new(Option::<AlertInfo>::None);
    let (is_loading, set_is_loading) = signal(false);

    let ctx = use_global_context();
    let api = use_api();
    let guard = MountGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        alert.set(None);

        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };
        if let Err(LoginError::MissingCredentials) = authenticate(&request) {
            alert.set(Some(LoginError::MissingCredentials.to_alert()));
            return;
        }

        set_is_loading.set(true);
        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            match api.login(request).await {
                Ok(response) => ctx.login(response.user),
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    guard.run(|| {
                        alert.set(Some(LoginError::InvalidEmail.to_alert()));
                        set_is_loading.set(false);
                    });
                }
            }
        });
    };

    let toggle_view = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        set_is_login_view.update(|v| *v = !*v);
        alert.set(None);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__brand">
                    {icon("pill")}
                    <h1>"PharmaIQ"</h1>
                </div>
                <p class="login-box__subtitle">
                    {move || if is_login_view.get() {
                        "Welcome back! Please sign in."
                    } else {
                        "Create your account."
                    }}
                </p>

                <AlertBanner alert=alert on_close=move |_| alert.set(None) />

                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="email"
                            placeholder="Email Address"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || match (is_loading.get(), is_login_view.get()) {
                            (true, _) => "Signing In...",
                            (false, true) => "Sign In",
                            (false, false) => "Sign Up",
                        }}
                    </button>
                </form>

                <p class="login-box__switch">
                    {move || if is_login_view.get() {
                        "Don't have an account?"
                    } else {
                        "Already have an account?"
                    }}
                    <a href="#" on:click=toggle_view>
                        {move || if is_login_view.get() { "Sign Up" } else { "Sign In" }}
                    </a>
                </p>
            </div>
        </div>
    }
}

//! Login page: email-only sign-in with an account-creation dialog.
//!
//! A login attempt can come back three ways: a token (success), an
//! "unknown user" signal (404, or a 2xx body without a token), or an
//! error. Unknown users get a confirmation dialog; confirming retries the
//! same login with the `create` flag set.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::LoginRequest;
use crate::session::guard::{self, GuardDecision};
use crate::session::state::Session;
use crate::util::email;

/// Login page. Guest-only; authenticated users are sent to the task view.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    // Guest guard: already-authenticated users don't belong here.
    {
        let session = session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if let GuardDecision::Redirect(target) = guard::check_guest(&session) {
                navigate(target, NavigateOptions::default());
            }
        });
    }

    let email_input = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    // Email awaiting account-creation confirmation; the dialog shows
    // while this is set.
    let pending_create = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let submit_navigate = navigate.clone();
    let submit = {
        let client = client.clone();
        Callback::new(move |_: ()| {
            let address = email_input.get().trim().to_owned();
            if !email::is_valid(&address) {
                error_message.set(Some("Please enter a valid email".to_owned()));
                return;
            }
            error_message.set(None);
            is_loading.set(true);

            #[cfg(feature = "hydrate")]
            spawn_login(
                client.clone(),
                submit_navigate.clone(),
                LoginRequest::new(&address),
                error_message,
                is_loading,
                pending_create,
            );
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, address);
            }
        })
    };

    let on_cancel_create = Callback::new(move |_: ()| {
        pending_create.set(None);
        is_loading.set(false);
    });

    #[cfg(feature = "hydrate")]
    let confirm_navigate = navigate.clone();
    let on_confirm_create = Callback::new(move |_: ()| {
        let Some(address) = pending_create.get() else {
            return;
        };
        pending_create.set(None);

        #[cfg(feature = "hydrate")]
        spawn_login(
            client.clone(),
            confirm_navigate.clone(),
            LoginRequest::creating(&address),
            error_message,
            is_loading,
            pending_create,
        );
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, address);
        }
    });

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"My Tasks"</h1>
                <p class="login-page__subtitle">"Enter your email to continue"</p>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="login-page__label">
                        "Email"
                        <input
                            class="login-page__input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email_input.get()
                            on:input=move |ev| email_input.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error_message.get().is_some()>
                        <div class="login-page__error">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        class="btn btn--primary login-page__submit"
                        type="submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Continue" }}
                    </button>
                </form>
            </div>

            <Show when=move || pending_create.get().is_some()>
                <CreateAccountDialog
                    email=Signal::derive(move || pending_create.get().unwrap_or_default())
                    on_cancel=on_cancel_create
                    on_confirm=on_confirm_create
                />
            </Show>
        </div>
    }
}

/// Run one login round trip and route its outcome into the page signals.
///
/// An unknown user on a plain attempt opens the create-account dialog; the
/// same signal after a `create` attempt is a hard failure.
#[cfg(feature = "hydrate")]
fn spawn_login(
    client: ApiClient,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    request: LoginRequest,
    error_message: RwSignal<Option<String>>,
    is_loading: RwSignal<bool>,
    pending_create: RwSignal<Option<String>>,
) {
    use crate::net::auth::{LoginOutcome, login};

    leptos::task::spawn_local(async move {
        match login(&client, &request).await {
            Ok(LoginOutcome::Success(_)) => {
                navigate(guard::TASKS_PATH, NavigateOptions::default());
            }
            Ok(LoginOutcome::UnknownUser(_)) => {
                if request.create == Some(true) {
                    error_message.set(Some("Failed to create account.".to_owned()));
                } else {
                    pending_create.set(Some(request.email.clone()));
                }
            }
            Err(err) => {
                error_message.set(Some(login_error_text(&err)));
            }
        }
        is_loading.set(false);
    });
}

/// Message shown for a failed login attempt.
#[cfg(feature = "hydrate")]
fn login_error_text(err: &crate::net::error::ApiError) -> String {
    match err {
        crate::net::error::ApiError::Status { message, .. } => message.clone(),
        _ => "Login failed. Please try again.".to_owned(),
    }
}

/// Confirmation dialog for creating an account for an unknown email.
#[component]
fn CreateAccountDialog(
    email: Signal<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Account"</h2>
                <p>{move || format!("User with email \"{}\" does not exist.", email.get())}</p>
                <p>"Would you like to create a new account?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Create Account"
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Login page exchanging credentials for the session flag.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

/// Login page — username/password form with a password-visibility toggle.
///
/// On success the session flag is set and the browser navigates to the
/// board. Rejected credentials and transport failures render as an inline
/// error under the form; the user may simply retry.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        let user = username.get();
        let pass = password.get();

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(true) => {
                        crate::state::session::set_authenticated();
                        navigate("/", NavigateOptions::default());
                    }
                    Ok(false) => {
                        error.set("Invalid username or password.".to_owned());
                    }
                    Err(err) => {
                        log::error!("login failed: {err}");
                        error.set("An error occurred. Please try again.".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Message Board"</h1>
            <form class="login-form" on:submit=submit>
                <label class="login-form__label">
                    "Username"
                    <input
                        class="login-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__label">
                    "Password"
                    <div class="login-form__password">
                        <input
                            class="login-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-form__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁️" }}
                        </button>
                    </div>
                </label>
                <p class="login-form__error">{move || error.get()}</p>
                <button type="submit" class="btn btn--primary">
                    "Login"
                </button>
            </form>
        </div>
    }
}

//! Message composer with live character counter and send action.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::composer::ComposerState;
use crate::util::notify;

/// Composer input, `N / 250` counter, and Send button.
///
/// The counter is advisory: typing past the soft limit is never blocked.
/// Send trims the draft first; an empty result alerts and skips the
/// network entirely. On a successful send the draft is cleared (counter
/// back to `0 / 250`) and `on_sent` runs so the board can refresh; on
/// failure the draft is kept so the user's text is not lost.
#[component]
pub fn Composer(on_sent: Callback<()>) -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();

    let counter = move || composer.get().counter_label();

    let do_send = move || {
        let Some(content) = composer.get().trimmed() else {
            notify::alert("Message cannot be empty.");
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&content).await {
                Ok(()) => {
                    composer.update(ComposerState::clear);
                    notify::alert("Message sent successfully!");
                    on_sent.run(());
                }
                Err(err) => {
                    log::error!("send failed: {err}");
                    notify::alert(send_failure_alert(&err));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = content;
            let _ = &on_sent;
        }
    };

    view! {
        <div class="composer">
            <textarea
                class="composer__input"
                placeholder="Write a message..."
                prop:value=move || composer.get().draft
                on:input=move |ev| composer.update(|c| c.draft = event_target_value(&ev))
            ></textarea>
            <div class="composer__row">
                <span class="composer__counter">{counter}</span>
                <button class="btn btn--primary composer__send" on:click=move |_| do_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Alert text for a send that did not go through. A server rejection gets
/// the endpoint-specific message; a transport failure the generic one.
pub fn send_failure_alert(err: &ApiError) -> &'static str {
    match err {
        ApiError::Rejected(_) => "Failed to send message.",
        ApiError::Transport(_) => "An error occurred.",
    }
}

//! Message board page: composer, retrieve and logout actions, message table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::composer::Composer;
use crate::components::message_table::MessageTable;
use crate::state::board::BoardState;
use crate::state::session;

/// Message board page, gated on the session flag.
///
/// Without the flag this renders nothing and leaves for the login page:
/// no handlers are wired and no network calls are issued. With it, the
/// board wires up and retrieves the message list once on load.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    // Session gate. Checked before any wiring so an unauthenticated load
    // does nothing but redirect.
    let authenticated = session::is_authenticated();
    if !authenticated {
        let navigate = use_navigate();
        Effect::new(move || {
            navigate("/login", NavigateOptions::default());
        });
        return view! { <div class="board-page board-page--redirecting"></div> }.into_any();
    }

    // Initial retrieve on load.
    Effect::new(move || {
        retrieve(board);
    });

    let on_retrieve = move |_| retrieve(board);

    let navigate = use_navigate();
    let on_logout = move |_| {
        session::clear();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1>"Message Board"</h1>
                <button class="btn board-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <Composer on_sent=Callback::new(move |()| retrieve(board))/>

            <div class="board-page__actions">
                <button class="btn" on:click=on_retrieve disabled=move || board.get().loading>
                    "Retrieve Messages"
                </button>
            </div>

            <MessageTable/>
        </div>
    }
    .into_any()
}

/// Issue a retrieve and render the response, unless a newer retrieve has
/// been issued in the meantime — then the response is discarded and the
/// existing rendering stays. Failures are diagnostic-only: logged, never
/// alerted, previous rendering untouched.
fn retrieve(board: RwSignal<BoardState>) {
    let token = board
        .try_update(BoardState::begin_retrieve)
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_messages().await {
            Ok(messages) => {
                board.update(|b| {
                    b.apply_retrieve(token, messages);
                });
            }
            Err(err) => {
                log::warn!("retrieve failed: {err}");
                board.update(|b| b.fail_retrieve(token));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

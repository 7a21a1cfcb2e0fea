//! Rendered message list.

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::util::timestamp::format_timestamp;

/// Table of retrieved messages, one row per message in server order.
///
/// Rows are built from message data and rendered as text nodes, so
/// markup-significant characters in message content display literally
/// instead of injecting HTML.
#[component]
pub fn MessageTable() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <table class="message-table">
            <thead>
                <tr>
                    <th>"Message"</th>
                    <th>"Timestamp"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let messages = board.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <tr class="message-table__empty">
                                <td colspan="2">"No messages yet"</td>
                            </tr>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let when = format_timestamp(&msg.timestamp);
                            view! {
                                <tr class="message-table__row">
                                    <td>{content}</td>
                                    <td>{when}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}

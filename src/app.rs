//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{board::BoardPage, login::LoginPage};
use crate::state::board::BoardState;
use crate::state::composer::ComposerState;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let board = RwSignal::new(BoardState::default());
    let composer = RwSignal::new(ComposerState::default());

    provide_context(board);
    provide_context(composer);

    view! {
        <Stylesheet id="main" href="/style.css"/>
        <Title text="Message Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}

//! App Root Component
//!
//! Provides the board to the component tree and starts the first load.

use leptos::*;

use crate::api::console_error;
use crate::components::{ActivityList, SignupPanel, Toast};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let board = provide_global_state();

    spawn_local(async move {
        // The load error is already rendered in place of the list
        if let Err(e) = board.load_activities().await {
            console_error(&format!("Failed to load activities: {}", e));
        }
    });

    view! {
        <header>
            <h1>"Activity Board"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupPanel />
                <Toast />
            </section>
        </main>
    }
}

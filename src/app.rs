//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::http::ApiClient;
use crate::pages::{login::LoginPage, tasks::TasksPage};
use crate::session::{LOGIN_PATH, Session};
use crate::state::tasks::TasksState;

/// HTML shell rendered by the host for hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and API client, provides them (plus the shared task
/// list state) via context, and sets up client-side routing. Unknown paths
/// redirect to the login entry point.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session for the whole app, rehydrated from localStorage; every
    // outgoing request flows through the one client so the 401 handling
    // is centralized.
    let session = Session::browser();
    let client = ApiClient::new(ApiConfig::default(), session.clone());
    let tasks = RwSignal::new(TasksState::default());

    provide_context(session);
    provide_context(client);
    provide_context(tasks);

    view! {
        <Stylesheet id="leptos" href="/pkg/tasks-client.css"/>
        <Title text="My Tasks"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
            </Routes>
        </Router>
    }
}

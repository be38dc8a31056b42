//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::{Guarded, UnknownRoute};
use crate::components::main_layout::MainLayout;
use crate::pages::{
    all_transactions::AllTransactionsPage, catalog::CatalogPage, login::LoginPage,
    my_transactions::MyTransactionsPage, permission_management::PermissionManagementPage, signup::SignupPage,
    transaction_management::TransactionManagementPage, user_management::UserManagementPage,
};
use crate::state::session::SessionState;
use crate::util::auth::install_session_restore;

/// HTML shell rendered on the server for SSR + hydration.
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
/// Provides the session signal, restores the persisted credential once
/// hydrated, and guards every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    install_session_restore(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/minibill.css"/>
        <Title text="MiniBill"/>

        <Router>
            <Routes fallback=|| view! { <UnknownRoute/> }>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                <Route path=StaticSegment("signup") view=|| view! { <Guarded><SignupPage/></Guarded> }/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded><MainLayout><CatalogPage/></MainLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("catalog")
                    view=|| view! { <Guarded><MainLayout><CatalogPage/></MainLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("my-transactions")
                    view=|| view! { <Guarded><MainLayout><MyTransactionsPage/></MainLayout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("transactions"))
                    view=|| view! { <Guarded><MainLayout><AllTransactionsPage/></MainLayout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("transaction-management"))
                    view=|| view! { <Guarded><MainLayout><TransactionManagementPage/></MainLayout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| view! { <Guarded><MainLayout><UserManagementPage/></MainLayout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("permissions"))
                    view=|| view! { <Guarded><MainLayout><PermissionManagementPage/></MainLayout></Guarded> }
                />
            </Routes>
        </Router>
    }
}

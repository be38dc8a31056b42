//! Route guard wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view is wrapped in [`Guarded`]. Until the browser has restored
//! the persisted session the wrapper renders a placeholder, which also keeps
//! the server-rendered HTML identical to the first client render. After that
//! the decision is taken once for the matched path and is not re-evaluated
//! while the view stays mounted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::util::auth::use_session;
use crate::util::guard::evaluate;

#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let path = use_location().pathname.get_untracked();
    let ready = Memo::new(move |_| session.with(|state| state.ready));

    move || {
        if !ready.get() {
            return view! { <p class="page-status">"Loading..."</p> }.into_any();
        }
        let decision = session.with_untracked(|state| evaluate(&state.session, &path));
        match decision.redirect_target() {
            Some(target) => {
                log::debug!("guard: {path} -> {target}");
                view! {
                    <Redirect
                        path=target
                        options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                    />
                }
                .into_any()
            }
            None => children().into_any(),
        }
    }
}

/// View for paths outside the route table; always redirects.
#[component]
pub fn UnknownRoute() -> impl IntoView {
    view! {
        <Guarded>
            <p class="page-status">"Page not found."</p>
        </Guarded>
    }
}

use leptos::prelude::*;

use super::session::ApplicantSession;

/// Renders `render` with the session when there is one.
/// Shows a login prompt otherwise.
#[component]
pub fn RequireSession<F>(session: Option<ApplicantSession>, render: F) -> impl IntoView
where
    F: FnOnce(ApplicantSession) -> AnyView + Send + 'static,
{
    match session {
        Some(session) => render(session),
        None => view! { <div class="session-required">"Please log in to see your saved jobs."</div> }
            .into_any(),
    }
}

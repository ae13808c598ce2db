use contracts::shared::ids::JobId;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::routes::{ReturnState, SAVED_JOBS_PATH};

/// Landing page for a job picked from the saved list.
///
/// Shows the selected id and links back to wherever the user came from.
#[component]
#[allow(non_snake_case)]
pub fn SavedJobDetailsPage(selected_job_id: ReadSignal<Option<JobId>>) -> impl IntoView {
    let location = use_location();
    let back_href = move || {
        ReturnState::from_history(&location.state.get())
            .map(|back| back.from)
            .unwrap_or_else(|| SAVED_JOBS_PATH.to_string())
    };

    view! {
        <div class="job-details">
            {move || match selected_job_id.get() {
                Some(id) => view! { <p>"Job " {id.to_string()}</p> }.into_any(),
                None => view! { <p>"No job selected."</p> }.into_any(),
            }}
            <A href=back_href>"Back"</A>
        </div>
    }
}

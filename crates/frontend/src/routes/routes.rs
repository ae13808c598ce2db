use contracts::shared::ids::JobId;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::location::State;
use leptos_router::{path, NavigateOptions};
use serde::{Deserialize, Serialize};

use crate::domain::saved_jobs::ui::details::SavedJobDetailsPage;
use crate::domain::saved_jobs::ui::list::SavedJobsPage;
use crate::shared::config::AppConfig;
use crate::system::auth::{ApplicantSession, RequireSession};

pub const SAVED_JOBS_PATH: &str = "/applicant-saved-jobs";
pub const VIEW_JOB_PATH: &str = "/applicant-view-job";

/// History state carried to a detail page so it can link back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnState {
    pub from: String,
}

impl ReturnState {
    pub fn navigate_options(&self) -> NavigateOptions {
        let state = match serde_wasm_bindgen::to_value(self) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Could not encode navigation state: {}", e);
                None
            }
        };
        NavigateOptions {
            state: State::new(state),
            ..Default::default()
        }
    }

    pub fn from_history(state: &State) -> Option<Self> {
        serde_wasm_bindgen::from_value(state.to_js_value()).ok()
    }
}

#[component]
fn SavedJobsRoute(selected_job_id: RwSignal<Option<JobId>>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let session = ApplicantSession::restore(&config.api);
    if session.is_none() {
        log::info!("No stored applicant session; showing login prompt");
    }

    view! {
        <RequireSession
            session=session
            render=move |session: ApplicantSession| {
                view! {
                    <SavedJobsPage session=session set_selected_job_id=selected_job_id.write_only() />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes(selected_job_id: RwSignal<Option<JobId>>) -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <div>"Page not found."</div> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <SavedJobsRoute selected_job_id=selected_job_id /> }
                    />
                    <Route
                        path=path!("/applicant-saved-jobs")
                        view=move || view! { <SavedJobsRoute selected_job_id=selected_job_id /> }
                    />
                    <Route
                        path=path!("/applicant-view-job")
                        view=move || view! { <SavedJobDetailsPage selected_job_id=selected_job_id.read_only() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

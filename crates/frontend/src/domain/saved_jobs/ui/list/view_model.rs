//! Saved Jobs List - ViewModel
//!
//! Owns the screen state signal and runs the network calls against it

use contracts::shared::ids::JobId;
use futures::join;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model::{delete_saved_job, fetch_saved_jobs};
use super::state::{Listing, SavedJobsState};
use crate::shared::config::AppConfig;
use crate::shared::lifetime::Lifetime;
use crate::shared::notifications::Notification;
use crate::system::auth::ApplicantSession;

#[derive(Clone)]
pub struct SavedJobsVm {
    pub state: RwSignal<SavedJobsState>,
    session: ApplicantSession,
    api_base: String,
    startup_delay_ms: u32,
    lifetime: Lifetime,
}

impl SavedJobsVm {
    /// Must be called inside the owning component so teardown ends the lifetime.
    pub fn new(config: &AppConfig, session: ApplicantSession) -> Self {
        Self {
            state: RwSignal::new(SavedJobsState::new()),
            session,
            api_base: config.api_base(),
            startup_delay_ms: config.ui.startup_delay_ms,
            lifetime: Lifetime::attach(),
        }
    }

    /// Run the startup delay and the initial fetch side by side; the list
    /// becomes visible once both have settled, whatever the fetch outcome.
    pub fn start(&self) {
        let vm = self.clone();
        spawn_local(async move {
            let (_, fetched) = join!(
                TimeoutFuture::new(vm.startup_delay_ms),
                fetch_saved_jobs(&vm.api_base, &vm.session)
            );

            match &fetched {
                Ok(jobs) => log::debug!("Loaded {} saved jobs", jobs.len()),
                Err(e) => log::error!("Error fetching saved jobs: {}", e),
            }

            if !vm.lifetime.is_active() {
                log::debug!("Saved jobs view closed before startup finished");
                return;
            }
            vm.state.try_update(|state| {
                state.apply_fetch(fetched);
                state.finish_startup();
            });
        });
    }

    /// Issue a delete for `job_id`. Each click issues its own request.
    pub fn remove(&self, job_id: JobId) {
        let vm = self.clone();
        spawn_local(async move {
            let result = delete_saved_job(&vm.api_base, &vm.session, &job_id).await;
            if let Err(e) = &result {
                log::error!("Error removing job {}: {}", job_id, e);
            }

            if !vm.lifetime.is_active() {
                return;
            }
            vm.state
                .try_update(|state| state.apply_remove(&job_id, result));
        });
    }

    pub fn dismiss(&self, notification_id: u64) {
        self.state.update(|state| {
            state.dismiss(notification_id);
        });
    }

    pub fn listing(&self) -> Listing {
        self.state.with(|state| state.listing())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state
            .with(|state| state.notifications.iter().cloned().collect())
    }
}

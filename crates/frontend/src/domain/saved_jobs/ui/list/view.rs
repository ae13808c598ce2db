//! Saved Jobs List - View Component

use contracts::shared::ids::JobId;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::card::JobCard;
use super::state::Listing;
use super::view_model::SavedJobsVm;
use crate::routes::routes::{ReturnState, VIEW_JOB_PATH};
use crate::shared::config::AppConfig;
use crate::shared::notifications::SnackbarStack;
use crate::system::auth::ApplicantSession;

#[component]
#[allow(non_snake_case)]
pub fn SavedJobsPage(
    session: ApplicantSession,
    /// Selection slot owned by the parent; written before navigating.
    set_selected_job_id: WriteSignal<Option<JobId>>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let vm = SavedJobsVm::new(&config, session);
    vm.start();

    let navigate = use_navigate();
    let location = use_location();

    let on_select = Callback::new(move |job_id: JobId| {
        set_selected_job_id.set(Some(job_id));
        let back = ReturnState {
            from: location.pathname.get_untracked(),
        };
        navigate(VIEW_JOB_PATH, back.navigate_options());
    });

    let on_remove = Callback::new({
        let vm = vm.clone();
        move |job_id: JobId| vm.remove(job_id)
    });

    let on_close_snackbar = Callback::new({
        let vm = vm.clone();
        move |id: u64| vm.dismiss(id)
    });

    let listing = Memo::new({
        let vm = vm.clone();
        move |_| vm.listing()
    });
    let notifications = Signal::derive(move || vm.notifications());

    view! {
        <div class="saved-jobs">
            {move || match listing.get() {
                Listing::Hidden => view! { <></> }.into_any(),
                Listing::Empty => view! {
                    <div class="dashboard__content">
                        <h1 class="title-dash" style="font-size: 24px; font-weight: bold;">"My Saved Jobs"</h1>
                        <div style="margin-left: 30px;">"No Saved jobs available"</div>
                    </div>
                }
                .into_any(),
                Listing::Cards(cards) => view! {
                    <div class="dashboard__content">
                        <h1 class="title-dash" style="font-size: 24px; font-weight: bold;">"My Saved Jobs"</h1>
                        <div class="group-col-2" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(360px, 1fr)); gap: var(--spacing-md);">
                            {cards
                                .into_iter()
                                .map(|card| view! { <JobCard card=card on_select=on_select on_remove=on_remove /> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
            <SnackbarStack
                notifications=notifications
                timeout_ms=config.ui.snackbar_timeout_ms
                on_close=on_close_snackbar
            />
        </div>
    }
}

use contracts::shared::ids::JobId;
use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded configuration: {}", e);
            return view! { <div>"Configuration error"</div> }.into_any();
        }
    };
    log::debug!("API base: {}", config.api_base());

    // Provide the configuration to the whole app via context.
    provide_context(config);

    // Selected job id, written by the saved-jobs list and read by the detail page.
    let selected_job_id = RwSignal::new(None::<JobId>);

    view! {
        <ConfigProvider>
            <AppRoutes selected_job_id=selected_job_id />
        </ConfigProvider>
    }
    .into_any()
}

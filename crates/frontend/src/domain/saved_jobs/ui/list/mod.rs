//! Saved Jobs List UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API paths and calls
//! - state.rs: SavedJobsState, the screen's state transitions
//! - card.rs: JobCardModel and the JobCard component
//! - view_model.rs: SavedJobsVm, async orchestration over an RwSignal
//! - view.rs: Main component SavedJobsPage

mod card;
mod model;
mod state;
mod view;
mod view_model;

pub use card::{handle_card_click, CardAction, ClickEvent, JobCard, JobCardModel};
pub use state::{Listing, SavedJobsState};
pub use view::SavedJobsPage;
pub use view_model::SavedJobsVm;

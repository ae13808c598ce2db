//! Saved Jobs List - Card
//!
//! Display projection of a saved job and the card component rendering it

use contracts::domain::saved_job::SavedJob;
use contracts::shared::ids::JobId;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_long_date;
use crate::shared::number_format::format_salary_range;

/// Everything a card shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct JobCardModel {
    pub id: JobId,
    pub company: String,
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub work_mode: &'static str,
    pub experience: String,
    pub salary: String,
    pub stars: usize,
    pub posted: Option<String>,
}

fn bound(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl From<&SavedJob> for JobCardModel {
    fn from(job: &SavedJob) -> Self {
        Self {
            id: job.id.clone(),
            company: job.company_name.clone().unwrap_or_default(),
            title: job.job_title.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            employment_type: job.employee_type.clone().unwrap_or_default(),
            work_mode: if job.remote { "Remote" } else { "Office-based" },
            experience: format!(
                "Exp \u{a0}{} - {} years",
                bound(job.minimum_experience),
                bound(job.maximum_experience)
            ),
            salary: format_salary_range(job.min_salary, job.max_salary),
            stars: job.star_rating as usize,
            posted: job
                .creation_date
                .as_deref()
                .map(|raw| format!("Posted on {}", format_long_date(raw))),
        }
    }
}

/// A click that can be kept from reaching enclosing elements.
pub trait ClickEvent {
    fn stop_bubbling(&self);
}

impl ClickEvent for MouseEvent {
    fn stop_bubbling(&self) {
        let event: &web_sys::Event = self.as_ref();
        event.stop_propagation();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Select,
    Remove,
}

/// Run a card action. The click stops here, so the Remove button never
/// reaches the card body and the card body never reaches the page.
pub fn handle_card_click(
    event: &impl ClickEvent,
    action: CardAction,
    job_id: &JobId,
    on_select: impl FnOnce(JobId),
    on_remove: impl FnOnce(JobId),
) {
    event.stop_bubbling();
    match action {
        CardAction::Select => on_select(job_id.clone()),
        CardAction::Remove => on_remove(job_id.clone()),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn JobCard(card: JobCardModel, on_select: Callback<JobId>, on_remove: Callback<JobId>) -> impl IntoView {
    let click = move |e: MouseEvent, action: CardAction, id: &JobId| {
        handle_card_click(&e, action, id, |id| on_select.run(id), |id| on_remove.run(id))
    };
    let on_card_click = {
        let id = card.id.clone();
        move |e: MouseEvent| click(e, CardAction::Select, &id)
    };
    let on_remove_click = {
        let id = card.id.clone();
        move |e: MouseEvent| click(e, CardAction::Remove, &id)
    };

    view! {
        <div class="saved-job-card" style="cursor: pointer;" on:click=on_card_click>
            <Card>
                <div class="job-archive-header">
                    <h4>{card.company}</h4>
                    <h3>{card.title}</h3>
                    <div class="job-location">
                        <span class="icon-map-pin"></span>
                        {format!("\u{a0}{}", card.location)}
                    </div>
                </div>
                <div class="job-archive-footer" style="display: flex; justify-content: space-between; gap: var(--spacing-md); flex-wrap: wrap;">
                    <div class="job-footer-left">
                        <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{card.employment_type}</Badge>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{card.work_mode}</Badge>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>{card.experience}</Badge>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{card.salary}</Badge>
                        </Flex>
                        <div class="star">
                            {(0..card.stars)
                                .map(|_| view! { <span class="icon-star-full">"\u{2605}"</span> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="job-footer-right">
                        {card.posted.map(|posted| view! {
                            <div class="price">
                                <span style="font-size: 12px;">{posted}</span>
                            </div>
                        })}
                        <Flex gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                size=ButtonSize::Small
                                on_click=on_remove_click
                            >
                                "Remove"
                            </Button>
                            // No handler of its own: the click selects via the card.
                            <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small>
                                "View Job"
                            </Button>
                        </Flex>
                    </div>
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordedClick {
        stopped: Cell<bool>,
    }

    impl ClickEvent for RecordedClick {
        fn stop_bubbling(&self) {
            self.stopped.set(true);
        }
    }

    #[derive(Default)]
    struct Calls {
        selected: RefCell<Vec<JobId>>,
        removed: RefCell<Vec<JobId>>,
    }

    /// Dispatch a click from the innermost handler outwards, as the DOM
    /// bubbles it, stopping where a handler stops propagation.
    fn bubble(handlers: &[CardAction], job_id: &JobId, calls: &Calls) -> RecordedClick {
        let click = RecordedClick::default();
        for action in handlers {
            if click.stopped.get() {
                break;
            }
            handle_card_click(
                &click,
                *action,
                job_id,
                |id| calls.selected.borrow_mut().push(id),
                |id| calls.removed.borrow_mut().push(id),
            );
        }
        click
    }

    #[test]
    fn test_remove_click_never_selects() {
        let calls = Calls::default();
        let id = JobId::new("5");
        // Remove button, then the card body around it.
        let click = bubble(&[CardAction::Remove, CardAction::Select], &id, &calls);

        assert!(click.stopped.get());
        assert_eq!(*calls.removed.borrow(), vec![id]);
        assert!(calls.selected.borrow().is_empty());
    }

    #[test]
    fn test_body_click_selects_once_and_never_removes() {
        let calls = Calls::default();
        let id = JobId::new("5");
        let click = bubble(&[CardAction::Select], &id, &calls);

        assert!(click.stopped.get());
        assert_eq!(*calls.selected.borrow(), vec![id]);
        assert!(calls.removed.borrow().is_empty());
    }

    #[test]
    fn test_remove_then_body_clicks_are_counted_separately() {
        let calls = Calls::default();
        let id = JobId::new("8");
        bubble(&[CardAction::Remove, CardAction::Select], &id, &calls);
        bubble(&[CardAction::Select], &id, &calls);

        assert_eq!(calls.removed.borrow().len(), 1);
        assert_eq!(calls.selected.borrow().len(), 1);
    }

    fn sample() -> SavedJob {
        SavedJob {
            company_name: Some("Acme Corp".into()),
            job_title: Some("Backend Engineer".into()),
            location: Some("Pune".into()),
            employee_type: Some("Full time".into()),
            remote: false,
            minimum_experience: Some(2.0),
            maximum_experience: Some(5.0),
            min_salary: Some(850000.0),
            max_salary: Some(1200000.0),
            star_rating: 3,
            creation_date: Some("2024-01-05".into()),
            ..SavedJob::with_id("77")
        }
    }

    #[test]
    fn test_card_model_labels() {
        let card = JobCardModel::from(&sample());
        assert_eq!(card.id.as_str(), "77");
        assert_eq!(card.company, "Acme Corp");
        assert_eq!(card.work_mode, "Office-based");
        assert_eq!(card.experience, "Exp \u{a0}2 - 5 years");
        assert_eq!(card.salary, "\u{20B9} 850000.00 - \u{20B9} 1200000.00 LPA");
        assert_eq!(card.posted.as_deref(), Some("Posted on January 5, 2024"));
    }

    #[test]
    fn test_star_count_follows_rating() {
        assert_eq!(JobCardModel::from(&sample()).stars, 3);
        let unrated = SavedJob {
            star_rating: 0,
            ..sample()
        };
        assert_eq!(JobCardModel::from(&unrated).stars, 0);
    }

    #[test]
    fn test_remote_label() {
        let remote = SavedJob {
            remote: true,
            ..sample()
        };
        assert_eq!(JobCardModel::from(&remote).work_mode, "Remote");
    }

    #[test]
    fn test_sparse_record_renders_blanks() {
        let card = JobCardModel::from(&SavedJob::with_id("1"));
        assert_eq!(card.company, "");
        assert_eq!(card.experience, "Exp \u{a0} -  years");
        assert_eq!(card.salary, "\u{20B9} 0.00 - \u{20B9} 0.00 LPA");
        assert_eq!(card.posted, None);
    }
}

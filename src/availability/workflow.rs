use askama::Template;
use chrono::{Local, NaiveDate};

use super::client::AvailabilityClient;
use super::dates::{DateRangeOptions, DateRangeProvider};
use super::query::{AvailabilityQuery, AvailabilityResult, BookingLink, DateSelection};
use crate::notify::{
    DialogLifecycle, DialogOutcome, DialogProvider, DialogRequest, Icon, NoticeOptions,
    NotificationFacade,
};
use crate::templates_structs::{ReservationDatesTemplate, RoomAvailableTemplate};

pub const DATES_DIALOG_TITLE: &str = "Choose your dates";
pub const NO_AVAILABILITY_TITLE: &str = "No availability";
pub const REQUEST_FAILED_TITLE: &str = "Something went wrong";

/// How a `check_availability` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityOutcome {
    /// Dialog dismissed or closed with nothing selected. No request was sent.
    Cancelled,
    /// Server confirmed the room; the booking dialog was shown.
    Available(AvailabilityResult),
    /// Server said no; the "No availability" notice was shown.
    Unavailable,
    /// Request or rendering failed; a generic error notice was shown.
    Failed(String),
}

/// Wires the date-range widget over the dialog's inputs.
struct DatePickerHooks<'a, D> {
    dates: &'a D,
    options: DateRangeOptions,
}

impl<D: DateRangeProvider> DialogLifecycle for DatePickerHooks<'_, D> {
    fn will_open(&mut self) {
        self.dates
            .attach(ReservationDatesTemplate::CONTAINER_ID, &self.options);
    }

    fn did_open(&mut self) {
        for input in [
            ReservationDatesTemplate::START_INPUT,
            ReservationDatesTemplate::END_INPUT,
        ] {
            self.dates.set_input_enabled(input, true);
        }
    }
}

pub struct AvailabilityWorkflow<P, D, C> {
    notifier: NotificationFacade<P>,
    dates: D,
    client: C,
}

impl<P, D, C> AvailabilityWorkflow<P, D, C>
where
    P: DialogProvider,
    D: DateRangeProvider,
    C: AvailabilityClient,
{
    pub fn new(notifier: NotificationFacade<P>, dates: D, client: C) -> Self {
        Self { notifier, dates, client }
    }

    pub fn notifier(&self) -> &NotificationFacade<P> {
        &self.notifier
    }

    pub async fn check_availability(&self, room_id: &str, csrf_token: &str) -> AvailabilityOutcome {
        self.check_availability_from(room_id, csrf_token, Local::now().date_naive())
            .await
    }

    /// Same as [`check_availability`](Self::check_availability) with an explicit first selectable day.
    pub async fn check_availability_from(
        &self,
        room_id: &str,
        csrf_token: &str,
        today: NaiveDate,
    ) -> AvailabilityOutcome {
        let body = match ReservationDatesTemplate::default().render() {
            Ok(body) => body,
            Err(e) => return self.fail(e.to_string()),
        };

        let hooks = DatePickerHooks {
            dates: &self.dates,
            options: DateRangeOptions::from_today(today),
        };

        let request = DialogRequest::new(DATES_DIALOG_TITLE, body, |outcome: DialogOutcome| {
            self.on_dates_chosen(outcome, room_id, csrf_token)
        })
        // The picker closes the dialog itself once a range is chosen.
        .show_confirm_button(false)
        .with_lifecycle(hooks);

        self.notifier.custom(request).await
    }

    async fn on_dates_chosen(
        &self,
        outcome: DialogOutcome,
        room_id: &str,
        csrf_token: &str,
    ) -> AvailabilityOutcome {
        let Some(payload) = outcome.payload() else {
            log::debug!("Date selection for room {room_id} cancelled");
            return AvailabilityOutcome::Cancelled;
        };

        let query = AvailabilityQuery::new(DateSelection::from_payload(payload), room_id, csrf_token);

        match self.client.search(&query).await {
            Ok(result) if result.ok => self.show_available(result).await,
            Ok(result) => {
                log::info!("Room {room_id} unavailable: {}", result.message);
                self.notifier.error(NoticeOptions::titled(NO_AVAILABILITY_TITLE));
                AvailabilityOutcome::Unavailable
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    async fn show_available(&self, result: AvailabilityResult) -> AvailabilityOutcome {
        let template = RoomAvailableTemplate {
            book_href: BookingLink::from(&result).href(),
        };
        let body = match template.render() {
            Ok(body) => body,
            Err(e) => return self.fail(e.to_string()),
        };

        let request = DialogRequest::new("", body, |_: DialogOutcome| async {})
            .icon(Icon::Success)
            .show_confirm_button(false);
        self.notifier.custom(request).await;

        AvailabilityOutcome::Available(result)
    }

    fn fail(&self, message: String) -> AvailabilityOutcome {
        log::error!("Availability check failed: {message}");
        self.notifier
            .error(NoticeOptions::titled(REQUEST_FAILED_TITLE).with_text(message.clone()));
        AvailabilityOutcome::Failed(message)
    }
}

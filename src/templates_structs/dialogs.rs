use askama::Template;

/// Dialog body with the start/end date inputs, both disabled until the dialog opens.
#[derive(Template)]
#[template(path = "dialogs/reservation_dates.html")]
pub struct ReservationDatesTemplate {
    pub form_id: &'static str,
    pub container_id: &'static str,
    pub start_input: &'static str,
    pub end_input: &'static str,
}

impl ReservationDatesTemplate {
    pub const FORM_ID: &'static str = "check-availability-form";
    pub const CONTAINER_ID: &'static str = "reservation-dates-modal";
    pub const START_INPUT: &'static str = "start_modal";
    pub const END_INPUT: &'static str = "end_modal";
}

impl Default for ReservationDatesTemplate {
    fn default() -> Self {
        Self {
            form_id: Self::FORM_ID,
            container_id: Self::CONTAINER_ID,
            start_input: Self::START_INPUT,
            end_input: Self::END_INPUT,
        }
    }
}

/// Follow-up body shown when the room is free.
#[derive(Template)]
#[template(path = "dialogs/room_available.html")]
pub struct RoomAvailableTemplate {
    /// Already percent-encoded by `BookingLink::href`.
    pub book_href: String,
}

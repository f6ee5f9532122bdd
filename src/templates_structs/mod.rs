// Askama template contexts: dialog bodies for the availability workflow and server pages.

mod dialogs;
mod pages;

pub use dialogs::{ReservationDatesTemplate, RoomAvailableTemplate};
pub use pages::{BookRoomTemplate, RoomPageTemplate};

//! Room availability check: pick dates in a dialog, ask the server, report back.

pub mod client;
pub mod dates;
pub mod query;
pub mod workflow;

pub use client::{AvailabilityClient, HttpAvailabilityClient};
pub use dates::{DateRangeOptions, DateRangeProvider};
pub use query::{AvailabilityQuery, AvailabilityResult, BookingLink, DateSelection};
pub use workflow::{AvailabilityOutcome, AvailabilityWorkflow};

use chrono::NaiveDate;

/// Display format handed to the date-range widget.
pub const DATE_FORMAT: &str = "yyyy-mm-dd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeOptions {
    pub format: &'static str,
    pub show_on_focus: bool,
    pub min_date: NaiveDate,
}

impl DateRangeOptions {
    /// Nothing before `today` is selectable.
    pub fn from_today(today: NaiveDate) -> Self {
        Self {
            format: DATE_FORMAT,
            show_on_focus: true,
            min_date: today,
        }
    }
}

/// The date-range widget and the inputs it drives.
pub trait DateRangeProvider {
    /// Attach a range picker to the container holding the start/end inputs.
    fn attach(&self, container_id: &str, options: &DateRangeOptions);

    fn set_input_enabled(&self, input_id: &str, enabled: bool);
}

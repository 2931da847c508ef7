pub mod completion_calendar;
pub mod stats_display;

pub use completion_calendar::CompletionCalendar;
pub use stats_display::StatsDisplay;

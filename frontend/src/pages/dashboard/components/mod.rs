pub mod create_habit_form;
pub mod habit_item;
pub mod migration_helper;
pub mod progress_chart;

pub use create_habit_form::{CreateHabitForm, FormEdit};
pub use habit_item::HabitItem;
pub use migration_helper::MigrationHelper;
pub use progress_chart::ProgressChart;

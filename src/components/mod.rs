pub mod chart;
pub mod expense_list;
pub mod graph;
pub mod home;
pub mod modal;
pub mod month_picker;
pub mod select_chart;
pub mod week_panel;

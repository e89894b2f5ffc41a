pub mod chat_panel;
pub mod notification;
pub mod results_panel;
pub mod ride_panel;

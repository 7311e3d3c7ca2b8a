pub mod layout;
mod exam;
mod menu;
mod results;

pub use exam::{draw_exam, draw_finish_confirmation};
pub use layout::{calculate_exam_chunks, calculate_results_chunks};
pub use menu::draw_menu;
pub use results::draw_results;

mod calculate_reading_time;
mod inner_text;

pub use calculate_reading_time::calculate_reading_time;
pub use inner_text::inner_text;

mod card;
mod markers;
mod reading_time;

pub use card::Card;
pub use markers::Markers;
pub use reading_time::ReadingTime;

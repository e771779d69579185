use log::{debug, info};

use crate::types::{Card, ReadingTime};
use crate::utils::calculate_reading_time;

pub fn annotate(card: &mut Card) -> Option<ReadingTime>{
    let content = match &card.content{
        Some(content) => content,
        None => {
            debug!("card has no content node, skipping");
            return None;
        }
    };
    let reading_time = calculate_reading_time(content);

    match card.display.as_mut(){
        Some(display) => *display = reading_time.to_string(),
        None => debug!("card has no reading time node, {} minute estimate not shown", reading_time.minutes()),
    }
    Some(reading_time)
}

// one pass per page load, returns how many labels were written
pub fn initialize(cards: &mut [Card]) -> usize{
    let mut written = 0;
    for card in cards.iter_mut(){
        if annotate(card).is_some() && card.display.is_some(){
            written += 1;
        }
    }
    info!("annotated {} of {} cards", written, cards.len());
    written
}

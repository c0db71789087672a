pub mod card;
pub mod card_set;
pub mod category;

pub mod alert;
pub mod result_card;

pub mod card_application;

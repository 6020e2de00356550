// Module exports for models

pub mod event;
pub mod settings;
pub mod time_of_day;

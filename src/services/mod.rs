// Service module exports

pub mod duration;
pub mod layout;
pub mod settings;

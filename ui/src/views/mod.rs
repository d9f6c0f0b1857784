pub mod chart;
pub mod history;
pub mod progress;
pub mod upload;
pub mod whatsapp;

//! Context filtering, selection and instruction synthesis

pub mod filter;
pub mod instructions;
pub mod models;

pub use filter::select_context;
pub use instructions::synthesize_instructions;
pub use models::{
    AvailableContext, CulturalProfile, LocalEvent, SelectedContext, TrendTopic, WeatherReading,
};

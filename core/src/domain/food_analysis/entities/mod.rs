pub mod analysis_response;
pub mod food_report;

pub use analysis_response::*;
pub use food_report::*;

pub mod config;
pub mod engine;
pub mod types;

pub use config::ThemeConfig;
pub use engine::{compensation_factor, compute, CalculatorEngine};
pub use types::{
    parse_de_number, CalculatorInputs, DerivedMetrics, FeeSchedule, InputBounds, InputRange,
    InterestRates,
};

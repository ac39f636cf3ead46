pub mod advisor;
pub mod calculations;
pub mod classifier;
pub mod trend;

pub use advisor::suggested_action;
pub use calculations::average_moisture;
pub use classifier::classify;
pub use trend::TrendReport;

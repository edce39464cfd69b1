pub mod error;
pub mod payload;
pub mod types;

pub use error::ChartError;
pub use payload::ChartPayload;
pub use types::{Chart, ChartAngle, ChartAngles, HouseCusp, Planet};

//! Solar-Return geometry and cross-referencing.
//!
//! Pure functions over [`Chart`] values: house placement, angular planets,
//! stelliums and cross-chart aspects, combined by [`Comparator`] into an
//! [`SrComparison`]. Nothing here performs I/O, so every entry point is
//! safe to call concurrently.

pub mod angle;
pub mod angular;
pub mod aspects;
pub mod chart;
pub mod comparison;
pub mod facts;
pub mod houses;
pub mod orbs;
pub mod sign;
pub mod stellium;

pub use angle::{angular_separation, normalize};
pub use angular::{find_angular_planets, AngularPlanet};
pub use aspects::{rank_aspects, AspectCalculator, AspectKind, AspectPair, DEFAULT_ASPECT_CAP};
pub use chart::{Chart, ChartAngle, ChartAngles, ChartError, HouseCusp, Planet};
pub use comparison::{compare, Comparator, ComparisonSettings, SrComparison};
pub use houses::{locate_house, try_locate_house, FALLBACK_HOUSE};
pub use orbs::OrbConfig;
pub use sign::ZodiacSign;
pub use stellium::{detect_stelliums, Stellium, StelliumKind, StelliumLocation};

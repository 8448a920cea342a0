//! Calculation services.
//!
//! - [`lunar_position`]: Moon longitude to Nakshatra, Pada and Rashi
//! - [`isthkaal`]: sunrise-relative elapsed time in ghati/pal
//! - [`normalize`]: timezone localization and Julian-day inputs
//! - [`pipeline`]: the two request pipelines over the lookup collaborators

pub mod isthkaal;
pub mod lunar_position;
pub mod normalize;
pub mod pipeline;

pub use isthkaal::Isthkaal;
pub use lunar_position::{classify, LunarPosition, Rashi};
pub use pipeline::{Calculator, IsthkaalReport, NakshatraReport};

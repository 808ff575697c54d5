pub mod grid;
pub mod shape;
pub mod stats;

pub use grid::linspace;
pub use shape::gaussian;
pub use stats::StatsHelper;

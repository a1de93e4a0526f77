mod differential;

pub use differential::DifferentialHeuristic;

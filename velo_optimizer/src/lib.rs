pub mod annealing;
pub mod budget;
pub mod descent;
pub mod evaluation;
pub mod feasibility;
pub mod multistart;
pub mod neighborhood;
pub mod solution;

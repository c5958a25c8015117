//! Route pricing and feasibility checking.

mod evaluator;

pub use evaluator::{RouteEvaluation, RouteEvaluator};

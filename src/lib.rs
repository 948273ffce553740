pub mod config;
pub mod engine;
pub mod membership;
pub mod recommend;
pub mod rules;
pub mod schema;

pub use engine::FuzzyEngine;
pub use membership::{FreshnessState, MembershipScores};

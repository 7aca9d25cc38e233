pub mod plan;
pub mod recipes;
pub mod shopping;

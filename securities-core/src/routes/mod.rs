//! Route model: parsing, producing and publishing routes

mod model;
mod rule;

pub use model::RouteModel;
pub use rule::{RouteRule, Rules};

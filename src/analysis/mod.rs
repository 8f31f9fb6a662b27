//! Weekly listening analysis: aggregation, normalization and stacking

mod aggregate;
mod normalize;
mod stack;

pub(crate) use aggregate::{aggregate_weeks, max_weekly_plays};
pub(crate) use normalize::{normalize_weeks, proportions_to_percentages};
pub(crate) use stack::stack_boundaries;

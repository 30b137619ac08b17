//! Adapters Layer - Evaluation Flow
//!
//! Connects parsed input to the domain and the domain to output.
//!
//! # Pipeline
//! - Inbound: `ParsedInput` (snapshot + optional request) -> `ResourceState`
//! - Outbound: `Evaluation` -> console text or JSON

pub mod evaluator;

pub use evaluator::{evaluate, evaluate_snapshot, judge_request, Evaluation, Verdict, NEW_NEED_HEADER};

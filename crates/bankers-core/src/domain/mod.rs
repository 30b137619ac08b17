//! Domain Layer - Banker's Algorithm
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Domain Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  Snapshot Module               Resources Module             │
//! │  └─ SystemSnapshot  ────────▶  ├─ ResourceState             │
//! │     (immutable input)          ├─ is_safe / safe_sequence   │
//! │                                ├─ check / apply / granted   │
//! │                                └─ StateReport / NeedReport  │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and pure apart from the explicit
//! `&mut self` setters and [`ResourceState::apply_request`].

pub mod resources;
pub mod snapshot;

pub use resources::{
    Matrix,
    NeedReport,
    ProcessId,
    RequestError,
    ResourceId,
    ResourceRequest,
    ResourceState,
    StateError,
    StateReport,
    Units,
};
pub use snapshot::SystemSnapshot;

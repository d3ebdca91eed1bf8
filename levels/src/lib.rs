#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level descriptors and the controllers that run them.
//!
//! Almost every level is plain data interpreted by [`GenericController`].
//! Puzzles that cannot be expressed as a descriptor get their own controller;
//! all of them are reachable through the [`LevelController`] sum type, which
//! [`LevelController::for_descriptor`] builds from the catalog entry.

mod catalog;
mod controller;
mod delta_to_edge;
mod descriptor;
mod generic;
mod inverse_delta;
mod linear_combination;

pub use catalog::{LevelCatalog, FIRST_LEVEL};
pub use controller::{Controller, LevelController, LevelState, ReplayPlan, WalkerMotion};
pub use delta_to_edge::{DeltaToEdgeController, GIVEN_DELTA};
pub use descriptor::{
    CustomValidator, LevelDescriptor, LevelKind, LevelStateView, TransferPolicy,
};
pub use generic::GenericController;
pub use inverse_delta::{InverseDeltaController, GIVEN_EDGE_COUNTS};
pub use linear_combination::LinearCombinationController;

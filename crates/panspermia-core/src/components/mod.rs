//! Entity definitions for the simulation.
//!
//! Entities are plain data. Their behavior lives in the rules; the only
//! logic here is geometry and a few derived queries.

mod common;
mod star;
mod planet;
mod asteroid;

pub use common::*;
pub use star::*;
pub use planet::*;
pub use asteroid::*;

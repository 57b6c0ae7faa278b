//! Test orchestration: the step table and the runner that walks it.

pub mod plan;
pub mod runner;

pub use plan::{Prerequisite, Step};
pub use runner::TestSuite;

//! Controller layer: page load orchestration and outcome classification.

pub mod events;
pub mod orchestration;

pub use orchestration::ViewController;

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;

// Interfaces exposed by optional front-ends.
//
// Each submodule should be feature-gated by the capability it implements.
#[cfg(feature = "cli")]
pub mod cli;

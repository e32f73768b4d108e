//! CLI Commands
//!
//! All shavec CLI commands organized as separate modules.

mod check;
mod gen;
mod pack;

pub use check::check;
pub use gen::generate;
pub use pack::pack;

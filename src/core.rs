pub mod banner;
mod interface;

pub use interface::{Cli, Commands};

//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod gate;
pub mod hash;
pub mod inspect;
pub mod verify;

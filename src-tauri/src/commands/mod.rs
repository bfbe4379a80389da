mod configuration;
mod sertop;

pub use configuration::*;
pub use sertop::*;

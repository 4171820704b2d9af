pub mod constants;
pub mod display;
pub mod error;
pub mod fade;
pub mod host;
pub mod panel;
pub mod preset;
pub mod sound;

pub use display::*;
pub use error::*;
pub use fade::*;
pub use host::*;
pub use panel::*;
pub use preset::*;
pub use sound::*;

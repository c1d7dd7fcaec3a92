pub mod components;
pub mod docbook;
pub mod markdown;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod traits;

pub use components::*;
pub use docbook::*;
pub use markdown::*;
pub use renderer::*;
pub use traits::*;

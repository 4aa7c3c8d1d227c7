pub mod renderer;
pub mod traits;
pub mod tags;
pub mod renders;

pub use renderer::*;
pub use traits::*;
pub use tags::*;
pub use renders::*;

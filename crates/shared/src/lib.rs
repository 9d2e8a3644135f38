pub mod engagement;
pub mod event;
pub mod media;

pub use engagement::*;
pub use event::*;
pub use media::*;

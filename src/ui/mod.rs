pub mod renderer;

pub use renderer::{KnobRenderer, KnobScene, RendererError};

//! The shared drawing engine: grid/pixel mapping, full-redraw rendering and
//! the `<canvas>` component both pages draw through.

mod component;
pub mod mapper;
pub mod render;
mod state;
pub mod surface;

pub(crate) use component::SegmentCanvas;
pub use state::{CanvasState, ImageSource, ImageState, Scene};

pub mod color;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod grid;

pub use color::Color;
pub use config::SurfaceConfig;
pub use core::{
    rate_title, HeadlessWindow, InputEvent, PointerPosition, RateChange, Rasterizer,
    SoftbufferWindow, SurfaceSize, WindowBackend, RATE_HINT,
};
pub use display::{DisplaySurface, Flow, SurfaceState, TitleSlot};
pub use error::{Result, SurfaceError};
pub use grid::{CellMatrix, ColorGrid};

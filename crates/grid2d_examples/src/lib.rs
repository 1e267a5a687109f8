#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, lerp_rgb, render_grid_to_png, RenderConfig, Rgb};

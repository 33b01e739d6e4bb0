mod canvas;
mod color;
mod component;
mod config;
mod error;
mod graph;
mod mount;
mod pulse;
mod render;
mod rotation;
mod simulation;
mod state;
mod types;

pub use color::band_color;
pub use component::InfinityLogo;
pub use config::{Dimensions, LogoConfig, RenderStyle, ShapeGeometry};
pub use error::LogoError;
pub use graph::symbol_position;
pub use pulse::NodeHighlight;
pub use render::{Circle, FrameStats, Segment, Surface};
pub use simulation::SimulationMode;
pub use state::LogoState;
pub use types::{LinkKind, LogoLink, LogoNode, Point, Rgb};

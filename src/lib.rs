pub mod basis;
pub mod canvas;
pub mod config;
pub mod generate;
pub mod mask;
pub mod render;

pub use crate::{
    basis::{Color, Density, IconKind},
    generate::{generate_icons, GeneratedSet},
};

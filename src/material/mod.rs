//! Materials for surfaces and polylines.
//!
//! ## Key Concepts
//!
//! - **Material**: fill of a surface graphic (box, polygon, wall, ...)
//! - **PolylineMaterial**: fill of a polyline, including dashes, arrows,
//!   glows and outlines
//!
//! ## Example
//!
//! ```ignore
//! use czml::material::{Material, SolidColorMaterial};
//! use czml::geom::Color;
//!
//! let red = SolidColorMaterial::builder().color(Color::rgb(255, 0, 0)?).build()?;
//! let material = Material::builder().solid_color(red).build()?;
//! ```

mod polyline;
mod surface;

pub use polyline::{
    PolylineArrow, PolylineArrowBuilder, PolylineDash, PolylineDashBuilder, PolylineGlow,
    PolylineGlowBuilder, PolylineMaterial, PolylineMaterialBuilder, PolylineOutline,
    PolylineOutlineBuilder,
};
pub use surface::{
    CheckerboardMaterial, CheckerboardMaterialBuilder, GridMaterial, GridMaterialBuilder,
    ImageMaterial, ImageMaterialBuilder, Material, MaterialBuilder, SolidColorMaterial,
    SolidColorMaterialBuilder, StripeMaterial, StripeMaterialBuilder,
};

//! Geometry and graphics composites.
//!
//! This module provides typed composites for the members of a packet:
//! - [`Position`] / [`PositionList`] / [`PositionListOfLists`] - where things are
//! - [`Orientation`] / [`ViewFrom`] - how they are oriented and viewed
//! - [`Billboard`] / [`Label`] / [`Point`] / [`Path`] - screen-space graphics
//! - [`BoxGraphics`] / [`Cylinder`] / [`Ellipse`] / [`Ellipsoid`] - closed shapes
//! - [`Corridor`] / [`Polygon`] / [`Polyline`] / [`Rectangle`] / [`Wall`] - surfaces
//! - [`Model`] / [`Tileset`] - external assets
//! - [`Color`], [`NearFarScalar`], [`DistanceDisplayCondition`] and the
//!   enumeration wrappers shared by the graphics

pub mod appearance;
pub mod billboard;
pub mod label;
pub mod model;
pub mod point;
pub mod position;
pub mod shapes;
pub mod surfaces;

pub use appearance::{
    ArcType, ArcTypeBuilder, ClassificationType, ClassificationTypeBuilder, Color, ColorBlendMode,
    ColorBlendModeBuilder, ColorBuilder, CornerType, CornerTypeBuilder, DistanceDisplayCondition,
    DistanceDisplayConditionBuilder, HeightReference, HeightReferenceBuilder, NearFarScalar,
    NearFarScalarBuilder, ShadowMode, ShadowModeBuilder,
};
pub use billboard::{Billboard, BillboardBuilder, EyeOffset, EyeOffsetBuilder};
pub use label::{Label, LabelBuilder};
pub use model::{Model, ModelBuilder, Tileset, TilesetBuilder};
pub use point::{Path, PathBuilder, Point, PointBuilder};
pub use position::{
    Orientation, OrientationBuilder, Position, PositionBuilder, PositionList, PositionListBuilder,
    PositionListOfLists, PositionListOfListsBuilder, ViewFrom, ViewFromBuilder,
};
pub use shapes::{
    BoxDimensions, BoxDimensionsBuilder, BoxGraphics, BoxGraphicsBuilder, Cylinder,
    CylinderBuilder, Ellipse, EllipseBuilder, Ellipsoid, EllipsoidBuilder, EllipsoidRadii,
    EllipsoidRadiiBuilder,
};
pub use surfaces::{
    Corridor, CorridorBuilder, Polygon, PolygonBuilder, Polyline, PolylineBuilder, Rectangle,
    RectangleBuilder, RectangleCoordinates, RectangleCoordinatesBuilder, Wall, WallBuilder,
};

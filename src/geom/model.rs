//! glTF models and 3D Tiles tilesets.

use serde_json::Value;

use crate::core::object::czml_object;
use crate::core::Uri;

use super::appearance::{
    Color, ColorBlendMode, DistanceDisplayCondition, HeightReference, ShadowMode,
};

czml_object! {
    /// A glTF model, positioned and oriented by the packet.
    pub struct Model / ModelBuilder {
        show("show"): temporal<bool>,
        /// URI of the glTF asset.
        gltf("gltf", required): temporal<Uri>,
        scale("scale"): temporal<f64>,
        minimum_pixel_size("minimumPixelSize"): temporal<f64>,
        maximum_scale("maximumScale"): temporal<f64>,
        incrementally_load_textures("incrementallyLoadTextures"): temporal<bool>,
        run_animations("runAnimations"): temporal<bool>,
        shadows("shadows"): temporal<ShadowMode>,
        height_reference("heightReference"): temporal<HeightReference>,
        silhouette_color("silhouetteColor"): temporal<Color>,
        /// Silhouette width in pixels.
        silhouette_size("silhouetteSize"): temporal<f64>,
        color("color"): temporal<Color>,
        color_blend_mode("colorBlendMode"): temporal<ColorBlendMode>,
        color_blend_amount("colorBlendAmount"): temporal<f64>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        /// Per-node transformations, keyed by node name.
        node_transformations("nodeTransformations"): temporal<Value>,
        articulations("articulations"): temporal<Value>,
    }
}

czml_object! {
    /// A 3D Tiles tileset.
    pub struct Tileset / TilesetBuilder {
        /// URI of the tileset JSON.
        uri("uri", required): temporal<Uri>,
        show("show"): temporal<bool>,
        maximum_screen_space_error("maximumScreenSpaceError"): temporal<f64>,
    }
}

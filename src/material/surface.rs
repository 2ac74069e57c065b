//! Surface materials.

use crate::core::object::czml_object;
use crate::core::{StripeOrientation, Uri};
use crate::geom::Color;

use super::polyline::PolylineOutline;

czml_object! {
    /// How a surface is colored or shaded. Usually exactly one member is set.
    pub struct Material / MaterialBuilder {
        solid_color("solidColor"): temporal<SolidColorMaterial>,
        image("image"): temporal<ImageMaterial>,
        grid("grid"): temporal<GridMaterial>,
        stripe("stripe"): temporal<StripeMaterial>,
        checkerboard("checkerboard"): temporal<CheckerboardMaterial>,
        polyline_outline("polylineOutline"): temporal<PolylineOutline>,
    }
}

czml_object! {
    /// Fills the surface with a solid, possibly translucent, color.
    pub struct SolidColorMaterial / SolidColorMaterialBuilder {
        color("color"): temporal<Color>,
    }
}

czml_object! {
    /// Fills the surface with a two-dimensional grid.
    pub struct GridMaterial / GridMaterialBuilder {
        color("color"): temporal<Color>,
        /// Alpha between grid lines, combined with the color alpha.
        cell_alpha("cellAlpha"): temporal<f64>,
        /// Grid lines along each axis, `[rows, columns]`.
        line_count("lineCount"): temporal<Vec<i64>>,
        line_thickness("lineThickness"): temporal<Vec<f64>>,
        line_offset("lineOffset"): temporal<Vec<f64>>,
    }
}

czml_object! {
    /// Fills the surface with alternating colored stripes.
    pub struct StripeMaterial / StripeMaterialBuilder {
        orientation("orientation"): temporal<StripeOrientation>,
        even_color("evenColor"): temporal<Color>,
        odd_color("oddColor"): temporal<Color>,
        offset("offset"): temporal<f64>,
        repeat("repeat"): temporal<f64>,
    }
}

czml_object! {
    /// Fills the surface with a checkerboard.
    pub struct CheckerboardMaterial / CheckerboardMaterialBuilder {
        even_color("evenColor"): temporal<Color>,
        odd_color("oddColor"): temporal<Color>,
        repeat("repeat"): temporal<Vec<i64>>,
    }
}

czml_object! {
    /// Fills the surface with an image.
    ///
    /// A bare URI string is accepted in place of the object.
    pub struct ImageMaterial / ImageMaterialBuilder {
        image("image"): temporal<Uri>,
        /// Tiling in each direction, `[x, y]`.
        repeat("repeat"): temporal<Vec<i64>>,
        color("color"): temporal<Color>,
        transparent("transparent"): temporal<bool>,
    }
    shorthand(field, input) {
        let uri = <Uri as crate::core::CzmlValue>::coerce(field, input)?;
        ImageMaterial::builder().image(uri).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StripeOrientation, ToCzml};
    use crate::util::Error;
    use serde_json::json;

    #[test]
    fn test_solid_color() {
        let m = Material::builder()
            .solid_color(
                SolidColorMaterial::builder()
                    .color(Color::rgb(255, 0, 0).unwrap())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(
            m.to_json_compact().unwrap(),
            r#"{"solidColor":{"color":{"rgba":[255.0,0.0,0.0,255.0]}}}"#
        );
    }

    #[test]
    fn test_grid_and_stripe() {
        let grid = GridMaterial::builder()
            .cell_alpha(0.2)
            .line_count([8_i64, 8])
            .build()
            .unwrap();
        assert_eq!(grid.to_json_compact().unwrap(), r#"{"cellAlpha":0.2,"lineCount":[8,8]}"#);

        let stripe = StripeMaterial::builder()
            .orientation(StripeOrientation::Vertical)
            .repeat(4.0)
            .build()
            .unwrap();
        assert_eq!(
            stripe.to_json_compact().unwrap(),
            r#"{"orientation":"VERTICAL","repeat":4.0}"#
        );
    }

    #[test]
    fn test_image_material_shorthand() {
        let m = Material::from_json(&json!({"image": "https://example.com/tile.png"})).unwrap();
        assert_eq!(
            m.to_json_compact().unwrap(),
            r#"{"image":{"image":"https://example.com/tile.png"}}"#
        );

        let err = Material::from_json(&json!({"image": 3})).unwrap_err();
        assert!(matches!(err, Error::TypeCoercion { field: "image", .. }));
    }

    #[test]
    fn test_checkerboard_from_json() {
        let m = Material::from_json(&json!({
            "checkerboard": {
                "evenColor": {"rgbaf": [1, 1, 1, 1]},
                "oddColor": {"rgbaf": [0, 0, 0, 1]},
                "repeat": [4, 4],
            }
        }))
        .unwrap();
        assert_eq!(
            m.to_json_compact().unwrap(),
            r#"{"checkerboard":{"evenColor":{"rgbaf":[1.0,1.0,1.0,1.0]},"oddColor":{"rgbaf":[0.0,0.0,0.0,1.0]},"repeat":[4,4]}}"#
        );
    }
}

//! CZML enumerations.
//!
//! Each enumeration serializes as its upper-snake CZML name and parses
//! from the same text.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::temporal::{IntoTemporal, Temporal};
use super::value::CzmlValue;
use crate::util::{Error, Result};

macro_rules! czml_enum {
    (
        $(#[$meta:meta])*
        $name:ident($property:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// CZML name of the variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )*
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $text => Ok($name::$variant), )*
                    other => Err(Error::invalid(format!(
                        "'{}' is not a valid {}", other, stringify!($name)
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
                s.serialize_str(self.as_str())
            }
        }

        impl CzmlValue for $name {
            const INTERVAL_KEY: Option<&'static str> = Some($property);

            fn coerce(field: &'static str, input: &Value) -> Result<Self> {
                input
                    .as_str()
                    .ok_or_else(|| Error::type_coercion(field, stringify!($name), input))?
                    .parse()
            }
        }

        impl IntoTemporal<$name> for $name {
            fn into_temporal(self) -> Result<Temporal<$name>> {
                Ok(Temporal::Constant(self))
            }
        }
    };
}

czml_enum! {
    /// How samples are interpolated.
    InterpolationAlgorithm("interpolationAlgorithm") {
        Linear => "LINEAR",
        Lagrange => "LAGRANGE",
        Hermite => "HERMITE",
    }
}

czml_enum! {
    /// Frame in which Cartesian positions are expressed.
    ReferenceFrame("referenceFrame") {
        Fixed => "FIXED",
        Inertial => "INERTIAL",
    }
}

czml_enum! {
    /// Path followed between polyline positions.
    ArcTypes("arcType") {
        None => "NONE",
        Geodesic => "GEODESIC",
        Rhumb => "RHUMB",
    }
}

czml_enum! {
    /// What a ground geometry classifies.
    ClassificationTypes("classificationType") {
        Terrain => "TERRAIN",
        Cesium3DTile => "CESIUM_3D_TILE",
        Both => "BOTH",
    }
}

czml_enum! {
    /// Behavior of the clock at the ends of its interval.
    ClockRange("range") {
        Unbounded => "UNBOUNDED",
        Clamped => "CLAMPED",
        LoopStop => "LOOP_STOP",
    }
}

czml_enum! {
    /// How the clock advances.
    ClockStep("step") {
        TickDependent => "TICK_DEPENDENT",
        SystemClockMultiplier => "SYSTEM_CLOCK_MULTIPLIER",
        SystemClock => "SYSTEM_CLOCK",
    }
}

czml_enum! {
    /// How a model color mixes with its source color.
    ColorBlendModes("colorBlendMode") {
        Highlight => "HIGHLIGHT",
        Replace => "REPLACE",
        Mix => "MIX",
    }
}

czml_enum! {
    /// Corner style of a corridor.
    CornerTypes("cornerType") {
        Rounded => "ROUNDED",
        Mitered => "MITERED",
        Beveled => "BEVELED",
    }
}

czml_enum! {
    /// What a height is relative to.
    HeightReferences("heightReference") {
        None => "NONE",
        ClampToGround => "CLAMP_TO_GROUND",
        RelativeToGround => "RELATIVE_TO_GROUND",
    }
}

czml_enum! {
    /// Horizontal anchor of a billboard or label.
    HorizontalOrigin("horizontalOrigin") {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
    }
}

czml_enum! {
    /// How label text is drawn.
    LabelStyle("style") {
        Fill => "FILL",
        Outline => "OUTLINE",
        FillAndOutline => "FILL_AND_OUTLINE",
    }
}

czml_enum! {
    /// Whether a geometry casts or receives shadows.
    ShadowModes("shadowMode") {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        CastOnly => "CAST_ONLY",
        ReceiveOnly => "RECEIVE_ONLY",
    }
}

czml_enum! {
    /// Direction of stripes in a stripe material.
    StripeOrientation("orientation") {
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
    }
}

czml_enum! {
    /// Vertical anchor of a billboard or label.
    VerticalOrigin("verticalOrigin") {
        Baseline => "BASELINE",
        Bottom => "BOTTOM",
        Center => "CENTER",
        Top => "TOP",
    }
}

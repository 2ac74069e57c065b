//! Composite objects: the table-driven declaration macro and the traits it
//! implements.
//!
//! Every CZML composite is declared once with [`czml_object!`], listing its
//! members in wire order:
//!
//! ```ignore
//! czml_object! {
//!     /// An orientation.
//!     pub struct Orientation / OrientationBuilder {
//!         delete("delete", deletes): value<bool>,
//!         unit_quaternion("unitQuaternion"): temporal<UnitQuaternionValue>,
//!         reference("reference"): value<ReferenceValue>,
//!     }
//!     check(o) {
//!         exactly_one_of(Orientation::NAME, &[
//!             ("unitQuaternion", o.unit_quaternion.is_some()),
//!             ("reference", o.reference.is_some()),
//!         ])
//!     }
//! }
//! ```
//!
//! Member kinds:
//! - `temporal<T>` - stored as [`Temporal<T>`](super::Temporal)
//! - `value<T>` - stored as `T`
//! - `id<String>` - stored as `String`, read back as `&str`
//!
//! Member flags:
//! - `deletes` - the `delete` member; when true all unflagged members are dropped
//! - `kept` - survives the delete short-circuit
//! - `required` - must be present unless deleted
//!
//! The macro generates the struct, a builder, JSON construction with unknown
//! member rejection, the finalization pass, ordered `Serialize`, and the
//! [`CzmlValue`](super::CzmlValue) / [`ToCzml`] / `Display` impls.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::util::{Error, Result};

/// Indent width of [`ToCzml::to_json`].
pub const DEFAULT_INDENT: usize = 4;

/// JSON output for composites and documents.
pub trait ToCzml: Serialize {
    /// Pretty JSON with the default indent.
    fn to_json(&self) -> Result<String> {
        self.to_json_pretty(DEFAULT_INDENT)
    }

    /// Pretty JSON with `indent` spaces per level.
    fn to_json_pretty(&self, indent: usize) -> Result<String> {
        let indent = vec![b' '; indent];
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(out)?)
    }

    /// JSON without any whitespace.
    fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Generic JSON value.
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Per-type hooks run by the finalization pass.
pub trait ObjectRules: Sized {
    /// Fill defaults before the delete short-circuit.
    fn prepare(&mut self) {}

    /// Type-specific checks, run only when not deleted.
    fn check(&self) -> Result<()> {
        Ok(())
    }

    /// Accept non-object JSON shorthand for this type.
    fn shorthand(field: &'static str, input: &Value) -> Result<Self> {
        Err(Error::type_coercion(field, "object", input))
    }
}

macro_rules! czml_object {
    (@store temporal $ty:ty) => { Option<$crate::core::Temporal<$ty>> };
    (@store value $ty:ty) => { Option<$ty> };
    (@store id $ty:ty) => { Option<$ty> };

    (@get temporal $field:ident $ty:ty; $(#[$m:meta])*) => {
        $(#[$m])*
        pub fn $field(&self) -> Option<&$crate::core::Temporal<$ty>> {
            self.$field.as_ref()
        }
    };
    (@get value $field:ident $ty:ty; $(#[$m:meta])*) => {
        $(#[$m])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (@get id $field:ident $ty:ty; $(#[$m:meta])*) => {
        $(#[$m])*
        pub fn $field(&self) -> &str {
            self.$field.as_deref().unwrap_or_default()
        }
    };

    (@set temporal $field:ident $ty:ty; $(#[$m:meta])*) => {
        $(#[$m])*
        pub fn $field(mut self, value: impl $crate::core::IntoTemporal<$ty>) -> Self {
            match value.into_temporal() {
                Ok(v) => self.inner.$field = Some(v),
                Err(e) => self.fail(e),
            }
            self
        }
    };
    (@set $kind:ident $field:ident $ty:ty; $(#[$m:meta])*) => {
        $(#[$m])*
        pub fn $field(mut self, value: impl $crate::core::IntoValue<$ty>) -> Self {
            match value.into_value() {
                Ok(v) => self.inner.$field = Some(v),
                Err(e) => self.fail(e),
            }
            self
        }
    };

    (@coerce temporal $ty:ty, $wire:expr, $input:expr) => {
        $crate::core::Temporal::<$ty>::coerce($wire, $input)
    };
    (@coerce $kind:ident $ty:ty, $wire:expr, $input:expr) => {
        <$ty as $crate::core::CzmlValue>::coerce($wire, $input)
    };

    (@deletes deletes $this:ident $field:ident) => { $this.$field == Some(true) };
    (@deletes $flag:ident $this:ident $field:ident) => { false };

    (@keep required $dst:ident $src:ident $field:ident) => {};
    (@keep $flag:ident $dst:ident $src:ident $field:ident) => {
        $dst.$field = $src.$field.take();
    };

    (@require required $this:ident $field:ident $wire:expr) => {
        $crate::core::rules::require(Self::NAME, $wire, $this.$field.is_some())?;
    };
    (@require $flag:ident $this:ident $field:ident $wire:expr) => {};

    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident($wire:literal $(, $flag:ident)*): $kind:ident<$ty:ty>
            ),* $(,)?
        }
        $(prepare($pthis:ident) $prepare:block)?
        $(check($cthis:ident) $check:block)?
        $(shorthand($sfield:ident, $sinput:ident) $shorthand:block)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( $field: $crate::core::object::czml_object!(@store $kind $ty), )*
        }

        impl $name {
            /// Type name used in diagnostics.
            pub const NAME: &'static str = stringify!($name);

            /// Wire names of all members, in serialization order.
            pub const FIELDS: &'static [&'static str] = &[$($wire),*];

            #[doc = concat!("Start building a [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }

            $( $crate::core::object::czml_object!(@get $kind $field $ty; $(#[$fmeta])*); )*

            /// Check whether the member with this wire name is present.
            pub fn is_set(&self, wire: &str) -> bool {
                match wire {
                    $( $wire => self.$field.is_some(), )*
                    _ => false,
                }
            }

            /// Wire names of the members present, in serialization order.
            pub fn present_fields(&self) -> Vec<&'static str> {
                let mut present = Vec::new();
                $( if self.$field.is_some() { present.push($wire); } )*
                present
            }

            /// Construct from JSON members, rejecting unknown names.
            pub fn from_fields(
                fields: &::serde_json::Map<String, ::serde_json::Value>,
            ) -> $crate::util::Result<Self> {
                Self::coerce_fields(fields)?.finalize()
            }

            /// Construct from a JSON object.
            pub fn from_json(input: &::serde_json::Value) -> $crate::util::Result<Self> {
                Self::from_fields($crate::core::value::object(Self::NAME, input)?)
            }

            /// Construct from JSON text.
            pub fn from_json_str(text: &str) -> $crate::util::Result<Self> {
                let input: ::serde_json::Value = ::serde_json::from_str(text)?;
                Self::from_json(&input)
            }

            fn coerce_fields(
                fields: &::serde_json::Map<String, ::serde_json::Value>,
            ) -> $crate::util::Result<Self> {
                $crate::core::rules::reject_unknown_fields(Self::NAME, Self::FIELDS, fields)?;
                let mut this = Self::default();
                $(
                    if let Some(input) = fields.get($wire).filter(|v| !v.is_null()) {
                        this.$field = Some(
                            $crate::core::object::czml_object!(@coerce $kind $ty, $wire, input)?
                        );
                    }
                )*
                Ok(this)
            }

            #[allow(unused_mut)]
            fn finalize(mut self) -> $crate::util::Result<Self> {
                <Self as $crate::core::ObjectRules>::prepare(&mut self);
                let mut this = self;

                let deleted = false
                    $( $( || $crate::core::object::czml_object!(@deletes $flag this $field) )* )*;
                if deleted {
                    let mut cleared = Self::default();
                    $( $( $crate::core::object::czml_object!(@keep $flag cleared this $field); )* )*
                    ::tracing::debug!(object = Self::NAME, "delete flag set, dropping other members");
                    return Ok(cleared);
                }

                $( $( $crate::core::object::czml_object!(@require $flag this $field $wire); )* )*
                <Self as $crate::core::ObjectRules>::check(&this)?;
                ::tracing::trace!(object = Self::NAME, "validated");
                Ok(this)
            }
        }

        impl $crate::core::ObjectRules for $name {
            $(
                fn prepare(&mut self) {
                    let $pthis = self;
                    $prepare
                }
            )?
            $(
                fn check(&self) -> $crate::util::Result<()> {
                    let $cthis = self;
                    $check
                }
            )?
            $(
                fn shorthand(
                    $sfield: &'static str,
                    $sinput: &::serde_json::Value,
                ) -> $crate::util::Result<Self> {
                    $shorthand
                }
            )?
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(None)?;
                $(
                    if let Some(value) = &self.$field {
                        map.serialize_entry($wire, value)?;
                    }
                )*
                map.end()
            }
        }

        impl $crate::core::CzmlValue for $name {
            const INTERVAL_KEY: Option<&'static str> = None;

            fn declares(member: &str) -> bool {
                Self::FIELDS.contains(&member)
            }

            fn coerce(
                field: &'static str,
                input: &::serde_json::Value,
            ) -> $crate::util::Result<Self> {
                match input {
                    ::serde_json::Value::Object(fields) => Self::from_fields(fields),
                    other => <Self as $crate::core::ObjectRules>::shorthand(field, other),
                }
            }
        }

        impl $crate::core::IntoTemporal<$name> for $name {
            fn into_temporal(self) -> $crate::util::Result<$crate::core::Temporal<$name>> {
                Ok($crate::core::Temporal::Constant(self))
            }
        }

        impl $crate::core::ToCzml for $name {}

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let text = $crate::core::ToCzml::to_json(self).map_err(|_| ::std::fmt::Error)?;
                f.write_str(&text)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Default)]
        pub struct $builder {
            inner: $name,
            error: Option<$crate::util::Error>,
        }

        impl $builder {
            $( $crate::core::object::czml_object!(@set $kind $field $ty; $(#[$fmeta])*); )*

            fn fail(&mut self, error: $crate::util::Error) {
                if self.error.is_none() {
                    self.error = Some(error);
                }
            }

            #[doc = concat!("Validate and produce the [`", stringify!($name), "`].")]
            pub fn build(self) -> $crate::util::Result<$name> {
                match self.error {
                    Some(error) => Err(error),
                    None => self.inner.finalize(),
                }
            }
        }
    };
}

pub(crate) use czml_object;

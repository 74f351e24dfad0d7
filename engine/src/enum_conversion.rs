/// Implements borrowing [TryFrom] and owning [From] conversions between an enum and the type
/// wrapped by one of its same-named newtype variants.
#[macro_export(local_inner_macros)]
macro_rules! impl_enum_conversions {
    ($enum_type:ident, $variant:ident, $variant_type:ident, $value_name:literal) => {
        impl<'a> TryFrom<&'a $enum_type> for &'a $variant_type {
            type Error = ::anyhow::Error;

            fn try_from(value: &'a $enum_type) -> ::std::result::Result<Self, Self::Error> {
                match value {
                    $enum_type::$variant(variant_value) => Ok(variant_value),
                    _ => Err(::anyhow::anyhow!(
                        "bug: {} is not of type {}, got {:?}",
                        $value_name,
                        std::stringify!($variant),
                        value,
                    )),
                }
            }
        }

        impl std::convert::From<$variant_type> for $enum_type {
            fn from(value: $variant_type) -> $enum_type {
                $enum_type::$variant(value)
            }
        }
    };
}

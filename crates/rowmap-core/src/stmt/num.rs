use super::Value;
use crate::{Error, Result};

macro_rules! impl_try_from_integer {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match value {
                        Value::I32(v) => <$ty>::try_from(v).ok(),
                        Value::I64(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_integer!(i16, i32, i64);

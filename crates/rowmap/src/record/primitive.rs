use rowmap_core::{schema::ColumnType, stmt::Value, Result};

use uuid::Uuid;

/// A field type that can be stored in a record property.
pub trait Primitive: Sized {
    /// Coercion used when reading the field out of a row.
    const TYPE: ColumnType = ColumnType::Other;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $kind:ident ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                const TYPE: ColumnType = ColumnType::$kind;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Value {
                    self.clone().into()
                }
            }
        )*
    };
}

impl_primitive! {
    i64 => Integer,
    String => Text,
    i16 => Other,
    i32 => Other,
    bool => Other,
    f64 => Other,
    Vec<u8> => Other,
    Uuid => Other,
}

impl Primitive for Value {
    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: ColumnType = T::TYPE;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

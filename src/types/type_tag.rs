//! Coarse classification of method parameters.

use super::field_type::{FieldType, PrimitiveType};
use crate::descriptor::symbols::{
    BOOLEAN, BYTE, CHAR, CLASS_START, DOUBLE, FLOAT, INT, LONG, SHORT,
};

/// The category of a method parameter as far as argument passing is concerned.
///
/// Primitive parameters keep their own tag. Class types and arrays of any element type,
/// including primitive arrays such as `[I`, are all tagged as [`TypeTag::Class`] since they
/// are passed as references.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TypeTag {
    /// `byte`, encoded as `B`.
    #[display("byte")]
    Byte,
    /// `char`, encoded as `C`.
    #[display("char")]
    Char,
    /// `double`, encoded as `D`.
    #[display("double")]
    Double,
    /// `float`, encoded as `F`.
    #[display("float")]
    Float,
    /// `int`, encoded as `I`.
    #[display("int")]
    Int,
    /// `long`, encoded as `J`.
    #[display("long")]
    Long,
    /// `short`, encoded as `S`.
    #[display("short")]
    Short,
    /// `boolean`, encoded as `Z`.
    #[display("boolean")]
    Bool,
    /// A class, an interface, or an array.
    #[display("class")]
    Class,
}

impl TypeTag {
    /// Returns the tag of a primitive descriptor byte, or [`None`] for any other byte.
    #[must_use]
    pub const fn from_primitive_byte(byte: u8) -> Option<Self> {
        match byte {
            BYTE => Some(Self::Byte),
            CHAR => Some(Self::Char),
            DOUBLE => Some(Self::Double),
            FLOAT => Some(Self::Float),
            INT => Some(Self::Int),
            LONG => Some(Self::Long),
            SHORT => Some(Self::Short),
            BOOLEAN => Some(Self::Bool),
            _ => None,
        }
    }

    /// Returns the descriptor byte that opens a parameter with this tag.
    /// [`TypeTag::Class`] maps to `L`.
    #[must_use]
    pub const fn descriptor_byte(self) -> u8 {
        match self {
            Self::Byte => BYTE,
            Self::Char => CHAR,
            Self::Double => DOUBLE,
            Self::Float => FLOAT,
            Self::Int => INT,
            Self::Long => LONG,
            Self::Short => SHORT,
            Self::Bool => BOOLEAN,
            Self::Class => CLASS_START,
        }
    }

    /// Checks whether a parameter with this tag occupies two local variable slots.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Long | Self::Double)
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.descriptor_byte()
    }
}

impl From<PrimitiveType> for TypeTag {
    fn from(primitive: PrimitiveType) -> Self {
        match primitive {
            PrimitiveType::Boolean => Self::Bool,
            PrimitiveType::Char => Self::Char,
            PrimitiveType::Float => Self::Float,
            PrimitiveType::Double => Self::Double,
            PrimitiveType::Byte => Self::Byte,
            PrimitiveType::Short => Self::Short,
            PrimitiveType::Int => Self::Int,
            PrimitiveType::Long => Self::Long,
        }
    }
}

impl From<&FieldType> for TypeTag {
    fn from(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Base(it) => Self::from(*it),
            FieldType::Object(_) | FieldType::Array(_) => Self::Class,
        }
    }
}

/// The tags of the parameters of a method, in declaration order.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
    derive_more::IntoIterator,
)]
#[into_iterator(owned, ref)]
pub struct ParameterTypes(Vec<TypeTag>);

impl ParameterTypes {
    /// Returns the number of local variable slots the parameters occupy.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.0.iter().map(|it| if it.is_wide() { 2 } else { 1 }).sum()
    }

    pub(crate) fn push(&mut self, tag: TypeTag) {
        self.0.push(tag);
    }
}

impl FromIterator<TypeTag> for ParameterTypes {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

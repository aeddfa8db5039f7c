//! Non-generic JVM field types.

use std::{fmt::Display, str::FromStr};

use super::{Descriptor, method_descriptor::InvalidDescriptor};
use crate::{
    descriptor::symbols::{ARRAY, CLASS_END, CLASS_START},
    jvm::references::ClassRef,
    macros::see_jvm_spec,
};

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl PrimitiveType {
    /// Returns the character encoding this type in a descriptor.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            _ => Err(InvalidDescriptor),
        }
    }
}

impl Descriptor for PrimitiveType {
    fn descriptor(&self) -> String {
        self.descriptor_char().to_string()
    }
}

/// The type of a field, a parameter, or a local variable.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A reference to a class or an interface.
    Object(ClassRef),
    /// An array whose elements have the inner type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// Wraps this type into an array of one more dimension.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Creates an array type with `dim` dimensions and elements of type `element`.
    #[must_use]
    pub fn array_of(element: FieldType, dim: u8) -> Self {
        (0..dim).fold(element, |it, _| it.into_array_type())
    }

    /// Checks whether this type is passed by reference (classes and arrays).
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !matches!(self, Self::Base(_))
    }
}

impl Descriptor for FieldType {
    fn descriptor(&self) -> String {
        match self {
            Self::Base(it) => it.descriptor(),
            Self::Object(class) => class.descriptor(),
            Self::Array(inner) => format!("{}{}", char::from(ARRAY), inner.descriptor()),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(it) => it.fmt(f),
            Self::Object(ClassRef { binary_name }) => {
                write!(f, "{}", binary_name.replace('/', "."))
            }
            Self::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

impl FromStr for FieldType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        match split_field_type(descriptor)? {
            (field_type, "") => Ok(field_type),
            _ => Err(InvalidDescriptor),
        }
    }
}

/// Splits one field type off the front of `input` and returns it with the text after it.
/// At most 255 array dimensions are accepted.
#[doc = see_jvm_spec!(4, 3, 2)]
pub(crate) fn split_field_type(input: &str) -> Result<(FieldType, &str), InvalidDescriptor> {
    let dim = input.bytes().take_while(|it| *it == ARRAY).count();
    let dim = u8::try_from(dim).map_err(|_| InvalidDescriptor)?;
    let element = input.get(usize::from(dim)..).ok_or(InvalidDescriptor)?;
    let (element_type, rest) = match element.bytes().next() {
        Some(CLASS_START) => {
            let (binary_name, rest) = element
                .get(1..)
                .and_then(|it| it.split_once(char::from(CLASS_END)))
                .ok_or(InvalidDescriptor)?;
            if !is_binary_name(binary_name) {
                return Err(InvalidDescriptor);
            }
            (FieldType::Object(ClassRef::new(binary_name)), rest)
        }
        Some(byte) => {
            let primitive = PrimitiveType::try_from(char::from(byte))?;
            (FieldType::Base(primitive), element.get(1..).ok_or(InvalidDescriptor)?)
        }
        None => return Err(InvalidDescriptor),
    };
    Ok((FieldType::array_of(element_type, dim), rest))
}

/// Checks the binary name of a class in its internal form, e.g., `java/lang/String`.
#[doc = see_jvm_spec!(4, 2, 1)]
pub(crate) fn is_binary_name(name: &str) -> bool {
    name.split('/').all(|segment| {
        !segment.is_empty() && !segment.contains(['.', ';', '[', '(', ')'])
    })
}

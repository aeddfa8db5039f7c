//! Non-generic JVM method descriptors.

use itertools::Itertools;
use std::{fmt::Display, str::FromStr};

use crate::{
    descriptor::symbols::{PARAMETERS_END, PARAMETERS_START, VOID},
    macros::see_jvm_spec,
};

use super::{
    Descriptor,
    field_type::{FieldType, split_field_type},
    type_tag::{ParameterTypes, TypeTag},
};

/// The descriptor of a method.
/// Consists of the parameters types and the return type.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct MethodDescriptor {
    /// The type of the parameters.
    pub parameters_types: Vec<FieldType>,
    /// The return type.
    pub return_type: ReturnType,
}

/// Denotes the return type of a method.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum ReturnType {
    /// The method returns a specific type.
    Some(FieldType),
    /// The return type of the method is `void`.
    Void,
}

/// An error indicating that the descriptor string is invalid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("Invalid descriptor")]
pub struct InvalidDescriptor;

impl MethodDescriptor {
    /// Returns the type tags of the parameters, in declaration order.
    /// Arrays are tagged as [`TypeTag::Class`] regardless of their element type.
    #[must_use]
    pub fn parameter_tags(&self) -> ParameterTypes {
        self.parameters_types.iter().map(TypeTag::from).collect()
    }

    /// Renders the method in Java syntax, e.g., `void foo(int, java.lang.String[])`.
    #[must_use]
    pub fn java_signature(&self, name: &str) -> String {
        format!(
            "{} {name}({})",
            self.return_type,
            self.parameters_types.iter().join(", ")
        )
    }
}

impl FromStr for MethodDescriptor {
    type Err = InvalidDescriptor;

    /// Parses a whole method descriptor. Class names are checked, and nothing may follow the
    /// return type.
    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let mut remaining = descriptor
            .strip_prefix(char::from(PARAMETERS_START))
            .ok_or(InvalidDescriptor)?;
        let mut parameters_types = Vec::new();
        let return_type = loop {
            if let Some(rest) = remaining.strip_prefix(char::from(PARAMETERS_END)) {
                break rest.parse()?;
            }
            let (parameter, rest) = split_field_type(remaining)?;
            parameters_types.push(parameter);
            remaining = rest;
        };
        Ok(Self {
            parameters_types,
            return_type,
        })
    }
}

impl Descriptor for MethodDescriptor {
    fn descriptor(&self) -> String {
        format!(
            "{}{}{}{}",
            char::from(PARAMETERS_START),
            self.parameters_types.iter().map(FieldType::descriptor).join(""),
            char::from(PARAMETERS_END),
            self.return_type.descriptor()
        )
    }
}

impl Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.descriptor())
    }
}

impl FromStr for ReturnType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        if descriptor.as_bytes() == [VOID] {
            Ok(Self::Void)
        } else {
            descriptor.parse().map(Self::Some)
        }
    }
}

impl Descriptor for ReturnType {
    fn descriptor(&self) -> String {
        match self {
            Self::Some(it) => it.descriptor(),
            Self::Void => char::from(VOID).to_string(),
        }
    }
}

/// Java syntax, e.g., `void` or `java.lang.String[]`.
impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Some(it) => it.fmt(f),
            Self::Void => f.write_str("void"),
        }
    }
}

use std::{fmt::Display, str::FromStr};

use super::DescriptorError;
use crate::types::{
    field_type::FieldType, method_descriptor::MethodDescriptor, type_tag::ParameterTypes,
};

/// How much checking the [`DescriptorEngine`] applies before operating on a descriptor.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Strictness {
    /// Only the delimiters an operation needs are checked. Malformed input yields partial or
    /// empty results where the free functions in [`crate::descriptor`] do so.
    #[default]
    Lenient,
    /// The whole descriptor must parse as a [`MethodDescriptor`], and operations that assume a
    /// leading class parameter check for it.
    Strict,
}

/// Descriptor operations under a configurable [`Strictness`].
///
/// With [`Strictness::Lenient`], every operation returns what the corresponding free function
/// returns.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct DescriptorEngine {
    strictness: Strictness,
}

impl DescriptorEngine {
    /// Creates an engine with the given strictness.
    #[must_use]
    pub const fn new(strictness: Strictness) -> Self {
        Self { strictness }
    }

    /// Creates a lenient engine.
    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(Strictness::Lenient)
    }

    /// Creates a strict engine.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(Strictness::Strict)
    }

    /// Returns the strictness of this engine.
    #[must_use]
    pub const fn strictness(&self) -> Strictness {
        self.strictness
    }

    const fn is_strict(self) -> bool {
        matches!(self.strictness, Strictness::Strict)
    }

    fn check(self, descriptor: &str) -> Result<(), DescriptorError> {
        if self.is_strict() {
            MethodDescriptor::from_str(descriptor).map_err(|source| {
                tracing::debug!(descriptor, "Rejected ill-formed method descriptor");
                DescriptorError::invalid(descriptor, source)
            })?;
        }
        Ok(())
    }

    /// See [`super::parameter_types`].
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    pub fn parameter_types(&self, descriptor: &str) -> Result<ParameterTypes, DescriptorError> {
        self.check(descriptor)?;
        Ok(super::parameter_types(descriptor))
    }

    /// See [`super::parameters`].
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    /// - See [`super::parameters`].
    pub fn parameters<'a>(&self, descriptor: &'a str) -> Result<&'a str, DescriptorError> {
        self.check(descriptor)?;
        super::parameters(descriptor)
    }

    /// See [`super::return_type`].
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    /// - See [`super::return_type`].
    pub fn return_type<'a>(&self, descriptor: &'a str) -> Result<&'a str, DescriptorError> {
        self.check(descriptor)?;
        super::return_type(descriptor)
    }

    /// See [`super::first_parameter`]. A strict engine reports a missing class parameter
    /// instead of returning an empty string.
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    /// - [`DescriptorError::NotAClassParameter`] if strict and the first parameter is not a
    ///   class type.
    pub fn first_parameter<'a>(&self, descriptor: &'a str) -> Result<&'a str, DescriptorError> {
        if self.is_strict() {
            self.check(descriptor)?;
            super::first_class_parameter(descriptor)
        } else {
            Ok(super::first_parameter(descriptor))
        }
    }

    /// See [`super::drop_first_parameter`].
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    /// - [`DescriptorError::NotAClassParameter`] if strict and the first parameter is not a
    ///   class type.
    /// - See [`super::drop_first_parameter`].
    pub fn drop_first_parameter(&self, descriptor: &str) -> Result<String, DescriptorError> {
        if self.is_strict() {
            self.check(descriptor)?;
            super::first_class_parameter(descriptor)?;
        }
        super::drop_first_parameter(descriptor)
    }

    /// See [`super::insert_first_parameter`]. A strict engine also checks that `fragment` is
    /// the descriptor of exactly one type.
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and either `descriptor` or `fragment` is
    ///   ill-formed.
    /// - See [`super::insert_first_parameter`].
    pub fn insert_first_parameter(
        &self,
        descriptor: &str,
        fragment: &str,
    ) -> Result<String, DescriptorError> {
        if self.is_strict() {
            self.check(descriptor)?;
            FieldType::from_str(fragment)
                .map_err(|source| DescriptorError::invalid(fragment, source))?;
        }
        super::insert_first_parameter(descriptor, fragment)
    }

    /// See [`super::java_constructor`].
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    /// - See [`super::java_constructor`].
    pub fn java_constructor(
        &self,
        owner: impl Display,
        descriptor: &str,
    ) -> Result<String, DescriptorError> {
        self.check(descriptor)?;
        super::java_constructor(owner, descriptor)
    }

    /// See [`super::java_method`].
    /// # Errors
    /// - [`DescriptorError::Invalid`] if strict and `descriptor` is ill-formed.
    /// - See [`super::java_method`].
    pub fn java_method(
        &self,
        owner: impl Display,
        name: impl Display,
        descriptor: &str,
    ) -> Result<String, DescriptorError> {
        self.check(descriptor)?;
        super::java_method(owner, name, descriptor)
    }
}

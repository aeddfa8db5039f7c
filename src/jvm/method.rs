//! Methods as handed over by a class file reader.

use bitflags::bitflags;

use super::references::ClassRef;
use crate::{
    descriptor::{self, DescriptorError},
    types::type_tag::ParameterTypes,
};

/// A method declared in a class, with its descriptor kept in the raw form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Method {
    /// The access flags of the method.
    pub access_flags: AccessFlags,
    /// The class declaring the method.
    pub owner: ClassRef,
    /// The name of the method.
    pub name: String,
    /// The raw descriptor of the method, e.g., `(ILjava/lang/String;)V`.
    pub descriptor: String,
}

impl Method {
    /// The name of the constructors.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";
    /// The name of the class initializer.
    pub const CLASS_INITIALIZER_NAME: &'static str = "<clinit>";

    /// Checks whether the method is declared `static`.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.access_flags.is_static()
    }

    /// Checks whether the method is a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == Self::CONSTRUCTOR_NAME
    }

    /// Checks whether the method is the static initializer block.
    #[must_use]
    pub fn is_static_initializer_block(&self) -> bool {
        self.name == Self::CLASS_INITIALIZER_NAME
    }

    /// Returns the type tags of the declared parameters.
    /// The implicit `this` of an instance method is not included.
    #[must_use]
    pub fn parameter_types(&self) -> ParameterTypes {
        descriptor::parameter_types(&self.descriptor)
    }

    /// Renders the method for diagnostics, `Owner(params)` for constructors and
    /// `Ret Owner::name(params)` otherwise.
    /// # Errors
    /// See [`descriptor::java_method`].
    pub fn java_signature(&self) -> Result<String, DescriptorError> {
        if self.is_constructor() {
            descriptor::java_constructor(&self.owner, &self.descriptor)
        } else {
            descriptor::java_method(&self.owner, &self.name, &self.descriptor)
        }
    }
}

bitflags! {
    /// The access flags of a method.
    #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
    pub struct AccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class and other classes belonging to the same nest.
        const PRIVATE = 0x0002;
        /// Declared `protected`; may be accessed within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`; must not be overridden.
        const FINAL = 0x0010;
        /// Declared `synchronized`; invocation is wrapped by a monitor use.
        const SYNCHRONIZED = 0x0020;
        /// A bridge method, generated by the compiler.
        const BRIDGE = 0x0040;
        /// Declared with variable number of arguments.
        const VARARGS = 0x0080;
        /// Declared `native`; implemented in a language other than Java.
        const NATIVE = 0x0100;
        /// Declared `abstract`; no implementation is provided.
        const ABSTRACT = 0x0400;
        /// In a `class` file whose major version is at least 46 and at most 60; Declared `strictfp`.
        const STRICT = 0x0800;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
    }
}

impl AccessFlags {
    /// Checks whether the `static` flag is set.
    #[must_use]
    pub fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }
}

/// Checks whether the raw `access_flags` of a method have the `static` flag set.
/// Unknown bits are ignored.
#[must_use]
pub fn is_static(access_flags: u16) -> bool {
    AccessFlags::from_bits_retain(access_flags).is_static()
}

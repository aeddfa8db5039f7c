//! References to JVM elements.
use std::fmt::Display;

use crate::{
    descriptor::symbols::{CLASS_END, CLASS_START},
    types::Descriptor,
};

/// A reference to a class or an interface.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct ClassRef {
    /// The binary name of the class in its internal form, e.g., `java/lang/String`.
    pub binary_name: String,
}

impl ClassRef {
    /// Creates a new [`ClassRef`] from a binary name.
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        ClassRef {
            binary_name: binary_name.into(),
        }
    }
}

impl Display for ClassRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary_name)
    }
}

impl Descriptor for ClassRef {
    /// The class type descriptor, e.g., `Ljava/lang/String;`.
    fn descriptor(&self) -> String {
        format!(
            "{}{}{}",
            char::from(CLASS_START),
            self.binary_name,
            char::from(CLASS_END)
        )
    }
}

use crate::types::method_descriptor::InvalidDescriptor;

/// An error raised when a descriptor can not be sliced or rewritten.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum DescriptorError {
    /// A delimiter the operation relies on is missing.
    #[error("Malformed descriptor `{descriptor}`: {reason}")]
    MalformedDescriptor {
        /// The offending descriptor.
        descriptor: String,
        /// What is missing.
        reason: &'static str,
    },
    /// The first parameter is expected to be a class type, but it is not.
    #[error("The first parameter of `{descriptor}` is not a class type")]
    NotAClassParameter {
        /// The offending descriptor.
        descriptor: String,
    },
    /// The descriptor does not conform to the grammar.
    #[error("Fail to parse descriptor `{descriptor}`: {source}")]
    Invalid {
        /// The offending descriptor or fragment.
        descriptor: String,
        /// The error raised by the parser.
        #[source]
        source: InvalidDescriptor,
    },
}

impl DescriptorError {
    pub(crate) fn malformed(descriptor: &str, reason: &'static str) -> Self {
        Self::MalformedDescriptor {
            descriptor: descriptor.to_owned(),
            reason,
        }
    }

    pub(crate) fn not_a_class_parameter(descriptor: &str) -> Self {
        Self::NotAClassParameter {
            descriptor: descriptor.to_owned(),
        }
    }

    pub(crate) fn invalid(descriptor: &str, source: InvalidDescriptor) -> Self {
        Self::Invalid {
            descriptor: descriptor.to_owned(),
            source,
        }
    }
}

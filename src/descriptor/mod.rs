//! Slicing and rewriting raw method descriptors.
//!
//! The functions in this module work on the descriptor string itself instead of a parsed
//! [`MethodDescriptor`](crate::types::method_descriptor::MethodDescriptor). They scan bytes,
//! relying on every grammar symbol being a single ASCII byte (see [`symbols`]), and they are
//! lenient: a descriptor is never validated as a whole, and each operation only checks the
//! delimiters it needs. Use a [`DescriptorEngine`] with [`Strictness::Strict`] to reject
//! ill-formed input up front.

mod engine;
mod errors;
pub mod symbols;

use std::fmt::Display;

pub use engine::{DescriptorEngine, Strictness};
pub use errors::DescriptorError;

use crate::types::type_tag::{ParameterTypes, TypeTag};
use symbols::{ARRAY, CLASS_END, CLASS_START, PARAMETERS_END, PARAMETERS_START};

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Normal { in_array: bool },
    ClassName,
}

/// Returns the type tags of the parameters of `descriptor`, in declaration order.
///
/// Arrays of any depth and element type collapse to a single [`TypeTag::Class`].
/// The scan stops at the first `)` outside a class name. Without one it runs to the end of
/// the input and returns the tags collected so far; bytes that are not part of the grammar
/// are skipped.
#[must_use]
pub fn parameter_types(descriptor: &str) -> ParameterTypes {
    let mut types = ParameterTypes::default();
    let mut state = ScanState::Normal { in_array: false };
    for byte in descriptor.bytes() {
        state = match (state, byte) {
            (ScanState::ClassName, CLASS_END) => ScanState::Normal { in_array: false },
            (ScanState::ClassName, _) => ScanState::ClassName,
            (ScanState::Normal { .. }, PARAMETERS_END) => return types,
            (ScanState::Normal { .. }, CLASS_START) => {
                types.push(TypeTag::Class);
                ScanState::ClassName
            }
            (ScanState::Normal { .. }, ARRAY) => ScanState::Normal { in_array: true },
            (ScanState::Normal { in_array }, _) => match TypeTag::from_primitive_byte(byte) {
                Some(tag) => {
                    types.push(if in_array { TypeTag::Class } else { tag });
                    ScanState::Normal { in_array: false }
                }
                None => ScanState::Normal { in_array },
            },
        };
    }
    tracing::trace!(descriptor, "Parameter scan reached the end without `)`");
    types
}

/// Returns the offset of the `)` closing the parameter list.
fn parameters_end(descriptor: &str) -> Result<usize, DescriptorError> {
    if descriptor.as_bytes().first() != Some(&PARAMETERS_START) {
        return Err(DescriptorError::malformed(descriptor, "missing `(`"));
    }
    descriptor
        .bytes()
        .rposition(|it| it == PARAMETERS_END)
        .ok_or_else(|| DescriptorError::malformed(descriptor, "missing `)`"))
}

/// Returns the part of `descriptor` between `(` and the last `)`.
/// For example, `ILjava/lang/String;` for `(ILjava/lang/String;)V`.
/// # Errors
/// - [`DescriptorError::MalformedDescriptor`] if `descriptor` does not start with `(` or
///   contains no `)`.
pub fn parameters(descriptor: &str) -> Result<&str, DescriptorError> {
    let end = parameters_end(descriptor)?;
    descriptor
        .get(1..end)
        .ok_or_else(|| DescriptorError::malformed(descriptor, "missing `)`"))
}

/// Returns the part of `descriptor` after the last `)`.
/// For example, `V` for `(ILjava/lang/String;)V`.
///
/// Together with [`parameters`] it partitions the descriptor, so
/// `format!("({}){}", parameters(d)?, return_type(d)?) == d`.
/// # Errors
/// - [`DescriptorError::MalformedDescriptor`] if `descriptor` does not start with `(` or
///   contains no `)`.
pub fn return_type(descriptor: &str) -> Result<&str, DescriptorError> {
    let end = parameters_end(descriptor)?;
    descriptor
        .get(end + 1..)
        .ok_or_else(|| DescriptorError::malformed(descriptor, "missing `)`"))
}

/// Returns the first parameter of `descriptor`, including the terminating `;`, if it is a
/// class type or an array of a class type, e.g., `[Ljava/lang/String;`.
/// # Errors
/// - [`DescriptorError::MalformedDescriptor`] if `descriptor` does not start with `(`, or the
///   class type is not terminated inside the parameter list.
/// - [`DescriptorError::NotAClassParameter`] if the parameter list is empty or starts with a
///   primitive or an array of primitives.
pub fn first_class_parameter(descriptor: &str) -> Result<&str, DescriptorError> {
    let bytes = descriptor.as_bytes();
    if bytes.first() != Some(&PARAMETERS_START) {
        return Err(DescriptorError::malformed(descriptor, "missing `(`"));
    }
    let element = 1 + bytes.iter().skip(1).take_while(|it| **it == ARRAY).count();
    if bytes.get(element) != Some(&CLASS_START) {
        return Err(DescriptorError::not_a_class_parameter(descriptor));
    }
    let unterminated = || DescriptorError::malformed(descriptor, "unterminated class type");
    let end = bytes
        .iter()
        .position(|it| *it == CLASS_END)
        .ok_or_else(unterminated)?;
    let param = descriptor.get(1..=end).ok_or_else(unterminated)?;
    if param.as_bytes().contains(&PARAMETERS_END) {
        return Err(unterminated());
    }
    Ok(param)
}

/// Returns the first parameter of `descriptor` if it is a class type or an array of a class
/// type, e.g., `Ljava/lang/Object;` for `(Ljava/lang/Object;I)V`, or an empty string otherwise.
///
/// This is the lenient counterpart of [`first_class_parameter`]: an empty parameter list, a
/// leading primitive or primitive array, and a malformed descriptor all yield `""`.
#[must_use]
pub fn first_parameter(descriptor: &str) -> &str {
    first_class_parameter(descriptor).unwrap_or_else(|error| {
        tracing::trace!(%error, "No leading class parameter");
        ""
    })
}

/// Removes the first parameter from `descriptor`, assuming it is a class type or an array of
/// a class type.
/// For example, `(I)V` for `(Ljava/lang/Object;I)V`.
///
/// Everything up to the first `;` is dropped, so the result is meaningless if the first
/// parameter is not a class type. [`DescriptorEngine::strict`] checks this.
/// # Errors
/// - [`DescriptorError::MalformedDescriptor`] if `descriptor` does not start with `(`.
/// - [`DescriptorError::NotAClassParameter`] if `descriptor` contains no class type at all.
pub fn drop_first_parameter(descriptor: &str) -> Result<String, DescriptorError> {
    if descriptor.as_bytes().first() != Some(&PARAMETERS_START) {
        return Err(DescriptorError::malformed(descriptor, "missing `(`"));
    }
    let end = descriptor
        .bytes()
        .position(|it| it == CLASS_END)
        .ok_or_else(|| DescriptorError::not_a_class_parameter(descriptor))?;
    let rest = descriptor
        .get(end + 1..)
        .ok_or_else(|| DescriptorError::not_a_class_parameter(descriptor))?;
    Ok(format!("({rest}"))
}

/// Prepends `fragment` to the parameters of `descriptor`.
/// For example, `(Ljava/lang/Object;I)V` for `(I)V` and `Ljava/lang/Object;`.
///
/// `fragment` is expected to be the descriptor of exactly one type; it is not checked here.
/// # Errors
/// - [`DescriptorError::MalformedDescriptor`] if `descriptor` does not start with `(`.
pub fn insert_first_parameter(descriptor: &str, fragment: &str) -> Result<String, DescriptorError> {
    let rest = descriptor
        .strip_prefix(char::from(PARAMETERS_START))
        .ok_or_else(|| DescriptorError::malformed(descriptor, "missing `(`"))?;
    Ok(format!("({fragment}{rest}"))
}

/// Renders a constructor as `Owner(params)` for diagnostics.
/// The parameters are printed in their raw descriptor form.
/// # Errors
/// See [`parameters`].
pub fn java_constructor(owner: impl Display, descriptor: &str) -> Result<String, DescriptorError> {
    Ok(format!("{owner}({})", parameters(descriptor)?))
}

/// Renders a method as `Ret Owner::name(params)` for diagnostics.
/// The return type and the parameters are printed in their raw descriptor form.
/// # Errors
/// See [`parameters`].
pub fn java_method(
    owner: impl Display,
    name: impl Display,
    descriptor: &str,
) -> Result<String, DescriptorError> {
    let params = parameters(descriptor)?;
    let ret = return_type(descriptor)?;
    Ok(format!("{ret} {owner}::{name}({params})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tests::{arb_class_name, arb_method_descriptor},
        types::{
            Descriptor,
            method_descriptor::MethodDescriptor,
            type_tag::TypeTag::{Bool, Class, Double, Int, Long},
        },
    };
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parameters_and_return_type_partition(descriptor in arb_method_descriptor()) {
            let descriptor = descriptor.descriptor();
            let params = parameters(&descriptor).unwrap();
            let ret = return_type(&descriptor).unwrap();
            prop_assert_eq!(format!("({params}){ret}"), descriptor);
        }

        #[test]
        fn scan_agrees_with_parser(descriptor in arb_method_descriptor()) {
            let tags = parameter_types(&descriptor.descriptor());
            prop_assert_eq!(tags, descriptor.parameter_tags());
        }

        #[test]
        fn insert_then_drop(descriptor in arb_method_descriptor(), class_name in arb_class_name()) {
            let descriptor = descriptor.descriptor();
            let fragment = format!("L{class_name};");
            let inserted = insert_first_parameter(&descriptor, &fragment).unwrap();
            prop_assert_eq!(first_parameter(&inserted), fragment.as_str());
            prop_assert_eq!(drop_first_parameter(&inserted).unwrap(), descriptor);
        }

        #[test]
        fn insert_prefixes_class_tag(descriptor in arb_method_descriptor(), class_name in arb_class_name()) {
            let descriptor = descriptor.descriptor();
            let inserted = insert_first_parameter(&descriptor, &format!("L{class_name};")).unwrap();
            let expected: ParameterTypes = std::iter::once(Class)
                .chain(parameter_types(&descriptor))
                .collect();
            prop_assert_eq!(parameter_types(&inserted), expected);
        }
    }

    #[test]
    fn no_parameters() {
        assert!(parameter_types("()V").is_empty());
    }

    #[test]
    fn primitive_array_is_class() {
        let tags = parameter_types("(ILjava/lang/String;[I)V");
        assert_eq!(tags.as_slice(), &[Int, Class, Class]);
    }

    #[test]
    fn multi_dimensional_arrays() {
        assert_eq!(parameter_types("([[Ljava/lang/Object;)V").as_slice(), &[Class]);
        assert_eq!(parameter_types("([[IJ[[[D)V").as_slice(), &[Class, Long, Class]);
    }

    #[test]
    fn return_type_is_not_scanned() {
        assert_eq!(parameter_types("(ZD)[J").as_slice(), &[Bool, Double]);
    }

    #[test]
    fn scan_without_closing_paren() {
        assert_eq!(parameter_types("(IL").as_slice(), &[Int, Class]);
        assert!(parameter_types("").is_empty());
    }

    #[test]
    fn scan_ignores_symbols_in_class_names() {
        assert_eq!(parameter_types("(LIJ/ZV;[LI;)V").as_slice(), &[Class, Class]);
    }

    #[test]
    fn multi_byte_class_names() {
        let descriptor = "(Lcafé/Thé;I)Lüber/Ärger;";
        assert_eq!(parameter_types(descriptor).as_slice(), &[Class, Int]);
        assert_eq!(parameters(descriptor).unwrap(), "Lcafé/Thé;I");
        assert_eq!(return_type(descriptor).unwrap(), "Lüber/Ärger;");
        assert_eq!(first_parameter(descriptor), "Lcafé/Thé;");
        assert_eq!(drop_first_parameter(descriptor).unwrap(), "(I)Lüber/Ärger;");
    }

    #[test]
    fn extract_return_type() {
        assert_eq!(return_type("(I)Ljava/lang/String;").unwrap(), "Ljava/lang/String;");
        assert_eq!(return_type("()V").unwrap(), "V");
    }

    #[test]
    fn extract_parameters() {
        assert_eq!(parameters("(ILjava/lang/String;[I)V").unwrap(), "ILjava/lang/String;[I");
        assert_eq!(parameters("()V").unwrap(), "");
    }

    #[test]
    fn missing_delimiters() {
        assert!(matches!(
            parameters("(IV"),
            Err(DescriptorError::MalformedDescriptor { .. })
        ));
        assert!(matches!(
            return_type("I)V"),
            Err(DescriptorError::MalformedDescriptor { .. })
        ));
        assert!(parameters("").is_err());
        assert!(return_type("").is_err());
    }

    #[test]
    fn first_parameter_of_class_type() {
        assert_eq!(first_parameter("(Ljava/lang/Object;I)V"), "Ljava/lang/Object;");
    }

    #[test]
    fn first_parameter_is_empty_otherwise() {
        assert_eq!(first_parameter("()V"), "");
        assert_eq!(first_parameter("()Ljava/lang/String;"), "");
        assert_eq!(first_parameter("(ILjava/lang/String;)V"), "");
        assert_eq!(first_parameter("([I)V"), "");
        assert_eq!(first_parameter("([[ILjava/lang/String;)V"), "");
        assert_eq!(first_parameter("(["), "");
        assert_eq!(first_parameter("(Ljava/lang/String)LFoo;"), "");
        assert_eq!(first_parameter(""), "");
    }

    #[test]
    fn strict_first_parameter() {
        assert_eq!(
            first_class_parameter("(I)V"),
            Err(DescriptorError::not_a_class_parameter("(I)V"))
        );
        assert!(matches!(
            first_class_parameter("(Ljava/lang/String"),
            Err(DescriptorError::MalformedDescriptor { .. })
        ));
    }

    #[test]
    fn first_parameter_of_class_array() {
        let descriptor = "([Ljava/lang/String;I)V";
        assert_eq!(first_parameter(descriptor), "[Ljava/lang/String;");
        assert_eq!(first_class_parameter(descriptor), Ok("[Ljava/lang/String;"));
        assert_eq!(drop_first_parameter(descriptor).unwrap(), "(I)V");
        assert_eq!(first_parameter("([[Ljava/lang/Object;)V"), "[[Ljava/lang/Object;");
    }

    proptest! {
        #[test]
        fn first_parameter_agrees_with_drop(
            descriptor in arb_method_descriptor(),
            class_name in arb_class_name(),
            dim in 0..4usize,
        ) {
            let descriptor = descriptor.descriptor();
            let fragment = format!("{}L{class_name};", "[".repeat(dim));
            let inserted = insert_first_parameter(&descriptor, &fragment).unwrap();
            let first = first_parameter(&inserted);
            prop_assert_eq!(first, fragment.as_str());
            let dropped = drop_first_parameter(&inserted).unwrap();
            prop_assert_eq!(insert_first_parameter(&dropped, first).unwrap(), inserted);
        }
    }

    #[test]
    fn drop_parameter() {
        assert_eq!(drop_first_parameter("(Ljava/lang/Object;I)V").unwrap(), "(I)V");
        assert_eq!(drop_first_parameter("(Ljava/lang/Object;)V").unwrap(), "()V");
        assert_eq!(
            drop_first_parameter("(I)V"),
            Err(DescriptorError::not_a_class_parameter("(I)V"))
        );
    }

    #[test]
    fn insert_parameter() {
        assert_eq!(
            insert_first_parameter("(I)V", "Ljava/lang/Object;").unwrap(),
            "(Ljava/lang/Object;I)V"
        );
        assert_eq!(insert_first_parameter("()V", "J").unwrap(), "(J)V");
        assert!(insert_first_parameter("", "J").is_err());
    }

    #[test]
    fn drop_then_insert() {
        let descriptor = "(Ljava/lang/Object;[IJ)Ljava/lang/String;";
        let dropped = drop_first_parameter(descriptor).unwrap();
        let restored = insert_first_parameter(&dropped, first_parameter(descriptor)).unwrap();
        assert_eq!(restored, descriptor);
    }

    #[test]
    fn java_style() {
        assert_eq!(java_method("Foo", "bar", "(I)V").unwrap(), "V Foo::bar(I)");
        assert_eq!(
            java_constructor("com/example/Foo", "(ILjava/lang/String;)V").unwrap(),
            "com/example/Foo(ILjava/lang/String;)"
        );
        assert!(java_method("Foo", "bar", "(I").is_err());
    }

    #[test]
    fn typed_descriptor_round_trip() {
        let descriptor: MethodDescriptor = "(ILjava/lang/String;[I)V".parse().unwrap();
        assert_eq!(parameters(&descriptor.descriptor()).unwrap(), "ILjava/lang/String;[I");
    }
}

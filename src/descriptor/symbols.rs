//! The grammar symbols of method descriptors.
//!
//! Every structural symbol is a single ASCII byte. A UTF-8 continuation byte never falls in
//! the ASCII range, so scanning a descriptor byte by byte can not mistake part of a multi-byte
//! class name for a symbol, and every offset of a symbol is a `char` boundary.

/// Opens the parameter list.
pub const PARAMETERS_START: u8 = b'(';
/// Closes the parameter list.
pub const PARAMETERS_END: u8 = b')';
/// Opens a class type, e.g., `Ljava/lang/String;`.
pub const CLASS_START: u8 = b'L';
/// Terminates a class type.
pub const CLASS_END: u8 = b';';
/// Prefixes the element type of an array.
pub const ARRAY: u8 = b'[';
/// The `void` return type.
pub const VOID: u8 = b'V';

/// `byte`
pub const BYTE: u8 = b'B';
/// `char`
pub const CHAR: u8 = b'C';
/// `double`
pub const DOUBLE: u8 = b'D';
/// `float`
pub const FLOAT: u8 = b'F';
/// `int`
pub const INT: u8 = b'I';
/// `long`
pub const LONG: u8 = b'J';
/// `short`
pub const SHORT: u8 = b'S';
/// `boolean`
pub const BOOLEAN: u8 = b'Z';

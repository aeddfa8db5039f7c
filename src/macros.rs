/// Expands to a doc line linking the given section of the JVM specification.
macro_rules! see_jvm_spec {
    ($chapter:literal $(, $section:literal)*) => {
        concat!(
            "\nSee the [JVM Specification §",
            $chapter $(, ".", $section)*,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter,
            ".html#jvms-",
            $chapter $(, ".", $section)*,
            ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;

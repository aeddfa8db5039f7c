#![no_main]

use jdesc::descriptor::{self, DescriptorEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let tags = descriptor::parameter_types(data);
    if let (Ok(params), Ok(ret)) = (descriptor::parameters(data), descriptor::return_type(data)) {
        assert_eq!(format!("({params}){ret}"), data);
    }
    let first = descriptor::first_parameter(data);
    if !first.is_empty() {
        let dropped = descriptor::drop_first_parameter(data).expect("a class parameter exists");
        let restored = descriptor::insert_first_parameter(&dropped, first).expect("starts with `(`");
        assert_eq!(restored, data);
    }
    if let Ok(strict_tags) = DescriptorEngine::strict().parameter_types(data) {
        assert_eq!(strict_tags, tags);
    }
});

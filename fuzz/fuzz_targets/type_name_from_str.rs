#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|type_name: arg_err::TypeName| {
    assert_eq!(Ok(type_name), type_name.as_str().parse());
});

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|schema_and_subject: (Vec<u8>, Vec<u8>)| {
    let serde_schema: arg_err::SerdeSchema = match serde_json::from_slice(&schema_and_subject.0) {
        Ok(serde_schema) => serde_schema,
        Err(_) => return,
    };

    // We're only interested in fuzzing against valid schemas.
    let schema = match arg_err::Schema::from_serde_schema(serde_schema) {
        Ok(schema) => schema,
        Err(_) => return,
    };

    if let Ok(subject) = serde_json::from_slice::<serde_json::Value>(&schema_and_subject.1) {
        let error = arg_err::validate_errors(&subject.into(), &schema, None)
            .expect("schemas loaded from json never fault during validation");
        assert_ne!(Some(String::new()), error);
    }
});

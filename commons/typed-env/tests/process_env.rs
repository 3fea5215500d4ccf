use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use typed_env::{Env, EnvError, MapEnv};
use typed_env_test_utils::{EnvVars, set_env_guarded, unique_key};

#[test]
fn test_get_string() {
    let set = unique_key("STRING");
    let unset = unique_key("STRING");
    let _g = set_env_guarded(&set, "STRING2");

    assert_eq!(typed_env::get_string(&unset, "string1"), "string1");
    assert_eq!(typed_env::get_string(&set, "string2"), "STRING2");
}

#[test]
fn test_get_string_slice() {
    let comma = unique_key("STRINGS");
    let space = unique_key("STRINGS");
    let _vars = EnvVars::new()
        .set(&comma, "string1,string2")
        .set(&space, "string1 string2 string3");

    assert_eq!(
        typed_env::get_string_slice(&unique_key("STRINGS"), ",", vec!["string1".into()]),
        vec!["string1"]
    );
    assert_eq!(
        typed_env::get_string_slice(&comma, ",", vec!["string2".into()]),
        vec!["string1", "string2"]
    );
    assert_eq!(
        typed_env::get_string_slice(&space, " ", vec!["string3".into()]),
        vec!["string1", "string2", "string3"]
    );
}

#[test]
fn test_get_int_family() {
    let valid = unique_key("INT");
    let invalid = unique_key("INT");
    let _vars = EnvVars::new().set(&valid, "2").set(&invalid, "três");

    assert_eq!(typed_env::get_int(&unique_key("INT"), 1), 1);
    assert_eq!(typed_env::get_int(&valid, 1), 2);
    assert_eq!(typed_env::get_int(&invalid, 3), 3);
    assert_eq!(typed_env::get_int8(&valid, 1), 2);
    assert_eq!(typed_env::get_int16(&valid, 1), 2);
    assert_eq!(typed_env::get_int32(&invalid, 3), 3);
    assert_eq!(typed_env::get_int64(&valid, 1), 2);
    assert_eq!(typed_env::get_uint(&valid, 1), 2);
    assert_eq!(typed_env::get_uint8(&invalid, 3), 3);
    assert_eq!(typed_env::get_uint16(&valid, 1), 2);
    assert_eq!(typed_env::get_uint32(&valid, 1), 2);
    assert_eq!(typed_env::get_uint64(&invalid, 3), 3);
}

#[test]
fn test_get_int_slices() {
    let comma = unique_key("INTS");
    let space = unique_key("INTS");
    let bad = unique_key("INTS");
    let _vars = EnvVars::new()
        .set(&comma, "1,2")
        .set(&space, "1 2 3")
        .set(&bad, "1,2,três");

    assert_eq!(typed_env::get_int_slice(&unique_key("INTS"), ",", vec![1]), vec![1]);
    assert_eq!(typed_env::get_int_slice(&comma, ",", vec![1]), vec![1, 2]);
    assert_eq!(typed_env::get_int32_slice(&space, " ", vec![1]), vec![1, 2, 3]);
    assert_eq!(typed_env::get_int64_slice(&bad, ",", vec![3]), vec![3]);
    assert_eq!(typed_env::get_uint_slice(&comma, ",", vec![]), vec![1, 2]);
    assert_eq!(typed_env::get_uint32_slice(&bad, ",", vec![3]), vec![3]);
    assert_eq!(typed_env::get_uint64_slice(&space, " ", vec![]), vec![1, 2, 3]);
    assert_eq!(typed_env::get_int8_slice(&comma, ",", vec![]), vec![1, 2]);
    assert_eq!(typed_env::get_int16_slice(&bad, ",", vec![5]), vec![5]);
    assert_eq!(typed_env::get_uint8_slice(&comma, ",", vec![]), vec![1, 2]);
    assert_eq!(typed_env::get_uint16_slice(&space, " ", vec![]), vec![1, 2, 3]);
}

#[test]
fn test_get_bool() {
    let t = unique_key("BOOL");
    let f = unique_key("BOOL");
    let bad = unique_key("BOOL");
    let list = unique_key("BOOLS");
    let _vars = EnvVars::new()
        .set(&t, "true")
        .set(&f, "False")
        .set(&bad, "verdadeiro")
        .set(&list, "true,0,T");

    assert!(typed_env::get_bool(&unique_key("BOOL"), true));
    assert!(typed_env::get_bool(&t, false));
    assert!(!typed_env::get_bool(&f, true));
    assert!(typed_env::get_bool(&bad, true));
    assert_eq!(
        typed_env::get_bool_slice(&list, ",", vec![]),
        vec![true, false, true]
    );
    assert_eq!(typed_env::get_bool_slice(&bad, ",", vec![false]), vec![false]);
}

#[test]
fn test_get_floats() {
    let valid = unique_key("FLOAT");
    let huge = unique_key("FLOAT");
    let list = unique_key("FLOATS");
    let _vars = EnvVars::new()
        .set(&valid, "2.5")
        .set(&huge, "1e40")
        .set(&list, "1.5,2,-3e2");

    assert_eq!(typed_env::get_float32(&valid, 1.0), 2.5);
    assert_eq!(typed_env::get_float32(&huge, 1.0), 1.0);
    assert_eq!(typed_env::get_float64(&huge, 1.0), 1e40);
    assert_eq!(
        typed_env::get_float64_slice(&list, ",", vec![]),
        vec![1.5, 2.0, -300.0]
    );
    assert_eq!(typed_env::get_float32_slice(&huge, ",", vec![0.5]), vec![0.5]);
}

#[test]
fn test_get_bytes() {
    let key = unique_key("BYTES");
    let _g = set_env_guarded(&key, "bytes2");

    assert_eq!(typed_env::get_bytes(&unique_key("BYTES"), b"bytes1".to_vec()), b"bytes1");
    assert_eq!(typed_env::get_bytes(&key, b"bytes1".to_vec()), b"bytes2");
}

#[test]
fn test_get_duration() {
    let key = unique_key("DURATION");
    let _g = set_env_guarded(&key, "10");

    assert_eq!(
        typed_env::get_duration(&unique_key("DURATION"), 1, Duration::from_secs(1)),
        Duration::from_secs(1)
    );
    assert_eq!(
        typed_env::get_duration(&key, 1, Duration::from_secs(60 * 60)),
        Duration::from_secs(10 * 60 * 60)
    );
}

#[test]
fn test_get_base64() {
    let valid = unique_key("BASE64");
    let invalid = unique_key("BASE64");
    let encoded = STANDARD.encode("Hello World 2");
    let _vars = EnvVars::new()
        .set(&valid, &encoded)
        .set(&invalid, "invalid-base64-value");

    assert_eq!(
        typed_env::get_base64_string(&unique_key("BASE64"), "Hello World 1"),
        "Hello World 1"
    );
    assert_eq!(
        typed_env::get_base64_string(&valid, "Hello World 1"),
        "Hello World 2"
    );
    assert_eq!(
        typed_env::get_base64_string(&invalid, "Hello World 1"),
        "Hello World 1"
    );
    assert_eq!(
        typed_env::get_base64_bytes(&valid, vec![]),
        b"Hello World 2"
    );
    assert_eq!(typed_env::get_base64_bytes(&invalid, vec![1]), vec![1]);
}

#[test]
fn test_generic_get() {
    let key = unique_key("GENERIC");
    let _g = set_env_guarded(&key, "7,8");

    assert_eq!(typed_env::get::<u32>(&key, 1), 1);
    assert_eq!(typed_env::get::<String>(&key, String::new()), "7,8");
    assert_eq!(typed_env::get_slice::<u32>(&key, ",", vec![]), vec![7, 8]);
}

#[test]
fn test_unset_variable_falls_back() {
    let key = unique_key("UNSET");
    let _outer = set_env_guarded(&key, "5");
    {
        let _vars = EnvVars::new().unset(&key);
        assert_eq!(typed_env::get_uint8(&key, 1), 1);
    }
    assert_eq!(typed_env::get_uint8(&key, 1), 5);
}

#[test]
fn test_prefixed_process_env() {
    let name = unique_key("PORT");
    let full = format!("APP_{name}");
    let _g = set_env_guarded(&full, "8080");

    let env = Env::process().with_prefix("APP_");
    assert_eq!(env.uint16(&name, 80), 8080);
    assert_eq!(Env::process().uint16(&name, 80), 80);
}

#[test]
fn test_require_on_process_env() {
    let key = unique_key("REQUIRED");
    let err = Env::process().require::<u16>(&key).unwrap_err();
    assert_eq!(err, EnvError::Missing { key: key.clone() });

    let _g = set_env_guarded(&key, "70000");
    assert!(matches!(
        Env::process().require::<u16>(&key),
        Err(EnvError::Invalid { .. })
    ));
}

#[test]
fn test_snapshot_is_isolated_from_later_changes() {
    let key = unique_key("SNAPSHOT");
    let g = set_env_guarded(&key, "1");
    let snapshot = Env::new(MapEnv::capture());
    drop(g);

    assert_eq!(snapshot.uint8(&key, 0), 1);
    assert_eq!(typed_env::get_uint8(&key, 0), 0);
}

//! Typed reads of environment variables with caller-supplied defaults.
//!
//! Every `get_*` function looks a variable up, converts it, and returns the
//! default when the variable is unset or does not convert. They never fail and
//! never panic. Slice variants split on a literal separator and are
//! all-or-nothing: one bad segment returns the whole default.
//!
//! ```
//! use std::time::Duration;
//!
//! let workers = typed_env::get_uint("MYAPP_WORKERS", 4);
//! let peers = typed_env::get_string_slice("MYAPP_PEERS", ",", vec![]);
//! let timeout = typed_env::get_duration("MYAPP_TIMEOUT_SECS", 30, Duration::from_secs(1));
//! # let _ = (workers, peers, timeout);
//! ```
//!
//! The free functions read the process environment. [`Env`] offers the same
//! reads over any [`EnvSource`], plus fallible variants (`try_get`,
//! `require`) for callers that need to know why a value was rejected.

mod accessor;
mod error;
mod parse;
mod source;

use std::time::Duration;

pub use accessor::Env;
pub use error::{EnvError, EnvResult, ParseError};
pub use parse::FromEnvStr;
pub use source::{EnvSource, FnEnv, MapEnv, Prefixed, ProcessEnv, from_fn};

const PROCESS: Env = Env::process();

/// Value of `key` converted to `T`, or `default`.
pub fn get<T: FromEnvStr>(key: &str, default: T) -> T {
    PROCESS.get(key, default)
}

/// `key` split on `sep` with every segment converted to `T`, or `default`.
pub fn get_slice<T: FromEnvStr>(key: &str, sep: &str, default: Vec<T>) -> Vec<T> {
    PROCESS.get_slice(key, sep, default)
}

pub fn get_string(key: &str, default: impl Into<String>) -> String {
    PROCESS.string(key, default)
}

pub fn get_string_slice(key: &str, sep: &str, default: Vec<String>) -> Vec<String> {
    PROCESS.string_slice(key, sep, default)
}

pub fn get_bool(key: &str, default: bool) -> bool {
    PROCESS.bool(key, default)
}

pub fn get_bool_slice(key: &str, sep: &str, default: Vec<bool>) -> Vec<bool> {
    PROCESS.bool_slice(key, sep, default)
}

pub fn get_bytes(key: &str, default: Vec<u8>) -> Vec<u8> {
    PROCESS.bytes(key, default)
}

/// `key` as a magnitude (or `default_magnitude`) multiplied by `unit`.
pub fn get_duration(key: &str, default_magnitude: u64, unit: Duration) -> Duration {
    PROCESS.duration(key, default_magnitude, unit)
}

pub fn get_base64_bytes(key: &str, default: Vec<u8>) -> Vec<u8> {
    PROCESS.base64_bytes(key, default)
}

pub fn get_base64_string(key: &str, default: impl Into<String>) -> String {
    PROCESS.base64_string(key, default)
}

macro_rules! process_numeric {
    ($($get:ident, $get_slice:ident => $method:ident, $slice_method:ident, $t:ty;)*) => {
        $(
            pub fn $get(key: &str, default: $t) -> $t {
                PROCESS.$method(key, default)
            }

            pub fn $get_slice(key: &str, sep: &str, default: Vec<$t>) -> Vec<$t> {
                PROCESS.$slice_method(key, sep, default)
            }
        )*
    };
}

process_numeric! {
    get_int, get_int_slice => int, int_slice, isize;
    get_int8, get_int8_slice => int8, int8_slice, i8;
    get_int16, get_int16_slice => int16, int16_slice, i16;
    get_int32, get_int32_slice => int32, int32_slice, i32;
    get_int64, get_int64_slice => int64, int64_slice, i64;
    get_uint, get_uint_slice => uint, uint_slice, usize;
    get_uint8, get_uint8_slice => uint8, uint8_slice, u8;
    get_uint16, get_uint16_slice => uint16, uint16_slice, u16;
    get_uint32, get_uint32_slice => uint32, uint32_slice, u32;
    get_uint64, get_uint64_slice => uint64, uint64_slice, u64;
    get_float32, get_float32_slice => float32, float32_slice, f32;
    get_float64, get_float64_slice => float64, float64_slice, f64;
}

//! The typed accessor.
//!
//! Two families of reads live on [`Env`]:
//!
//! - fallible reads (`try_get`, `require`, `try_get_slice`, `try_base64_bytes`)
//!   that report exactly what went wrong through [`EnvError`];
//! - default-on-failure reads (`get`, `get_slice` and the named accessors)
//!   that never fail. When a variable is absent or does not convert they hand
//!   back the caller's default untouched. A slice is all-or-nothing: one bad
//!   segment discards the whole value.

use std::ffi::OsString;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, trace};

use crate::error::{EnvError, EnvResult};
use crate::parse::{FromEnvStr, parse_segments};
use crate::source::{EnvSource, Prefixed, ProcessEnv};

/// Typed reads over an [`EnvSource`].
#[derive(Debug, Default, Clone)]
pub struct Env<S = ProcessEnv> {
    source: S,
}

impl Env<ProcessEnv> {
    /// Accessor over the environment of the running process.
    pub const fn process() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: EnvSource> Env<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Accessor whose keys are all read under `prefix`.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Env<Prefixed<S>> {
        Env::new(Prefixed::new(prefix, self.source))
    }

    /// Raw value, if the variable is set.
    pub fn raw(&self, key: &str) -> Option<OsString> {
        self.source.lookup(key)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    fn text(&self, key: &str) -> EnvResult<Option<String>> {
        match self.raw(key) {
            None => Ok(None),
            Some(raw) => raw
                .into_string()
                .map(Some)
                .map_err(|_| EnvError::NotUnicode { key: key.to_owned() }),
        }
    }

    /// Reads and converts `key`; `Ok(None)` when it is not set.
    pub fn try_get<T: FromEnvStr>(&self, key: &str) -> EnvResult<Option<T>> {
        let Some(raw) = self.text(key)? else {
            return Ok(None);
        };
        T::from_env_str(&raw)
            .map(Some)
            .map_err(|source| EnvError::Invalid {
                key: key.to_owned(),
                source,
            })
    }

    /// Like [`Env::try_get`], but an unset variable is an error too.
    pub fn require<T: FromEnvStr>(&self, key: &str) -> EnvResult<T> {
        self.try_get(key)?.ok_or_else(|| EnvError::Missing {
            key: key.to_owned(),
        })
    }

    /// Splits `key` on `sep` and converts every segment.
    pub fn try_get_slice<T: FromEnvStr>(
        &self,
        key: &str,
        sep: &str,
    ) -> EnvResult<Option<Vec<T>>> {
        let Some(raw) = self.text(key)? else {
            return Ok(None);
        };
        parse_segments(&raw, sep).map(Some).map_err(|(index, source)| {
            EnvError::InvalidSegment {
                key: key.to_owned(),
                index,
                source,
            }
        })
    }

    /// Decodes `key` as standard padded base64.
    pub fn try_base64_bytes(&self, key: &str) -> EnvResult<Option<Vec<u8>>> {
        let Some(raw) = self.text(key)? else {
            return Ok(None);
        };
        STANDARD
            .decode(raw.as_bytes())
            .map(Some)
            .map_err(|source| EnvError::Base64 {
                key: key.to_owned(),
                source,
            })
    }

    /// Decodes `key` as standard padded base64 holding utf-8 text.
    pub fn try_base64_string(&self, key: &str) -> EnvResult<Option<String>> {
        let Some(bytes) = self.try_base64_bytes(key)? else {
            return Ok(None);
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|source| EnvError::Utf8 {
                key: key.to_owned(),
                source,
            })
    }

    /// Value of `key` converted to `T`, or `default` when unset or invalid.
    pub fn get<T: FromEnvStr>(&self, key: &str, default: T) -> T {
        or_default(key, self.try_get(key), default)
    }

    /// Segments of `key` split on `sep`, or `default` when unset or when any
    /// segment is invalid.
    pub fn get_slice<T: FromEnvStr>(
        &self,
        key: &str,
        sep: &str,
        default: Vec<T>,
    ) -> Vec<T> {
        or_default(key, self.try_get_slice(key, sep), default)
    }

    pub fn string(&self, key: &str, default: impl Into<String>) -> String {
        self.get(key, default.into())
    }

    /// Empty segments are kept as empty strings.
    pub fn string_slice(
        &self,
        key: &str,
        sep: &str,
        default: Vec<String>,
    ) -> Vec<String> {
        self.get_slice(key, sep, default)
    }

    pub fn bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn bool_slice(&self, key: &str, sep: &str, default: Vec<bool>) -> Vec<bool> {
        self.get_slice(key, sep, default)
    }

    /// Raw bytes of `key`.
    ///
    /// On unix the OS bytes are returned as-is even when they are not utf-8.
    pub fn bytes(&self, key: &str, default: Vec<u8>) -> Vec<u8> {
        match self.raw(key) {
            None => or_default(key, Ok(None), default),
            Some(raw) => match os_bytes(raw) {
                Some(bytes) => bytes,
                None => or_default(
                    key,
                    Err(EnvError::NotUnicode { key: key.to_owned() }),
                    default,
                ),
            },
        }
    }

    /// `key` read as a `u64` magnitude (or `default_magnitude`), times `unit`.
    ///
    /// The unit applies to the default too: unset with `(1, 1s)` is one
    /// second. Saturates at [`Duration::MAX`].
    pub fn duration(&self, key: &str, default_magnitude: u64, unit: Duration) -> Duration {
        scale(self.uint64(key, default_magnitude), unit)
    }

    pub fn base64_bytes(&self, key: &str, default: Vec<u8>) -> Vec<u8> {
        or_default(key, self.try_base64_bytes(key), default)
    }

    pub fn base64_string(&self, key: &str, default: impl Into<String>) -> String {
        or_default(key, self.try_base64_string(key), default.into())
    }
}

macro_rules! numeric_accessors {
    ($($name:ident, $slice:ident => $t:ty;)*) => {
        impl<S: EnvSource> Env<S> {
            $(
                pub fn $name(&self, key: &str, default: $t) -> $t {
                    self.get(key, default)
                }

                pub fn $slice(&self, key: &str, sep: &str, default: Vec<$t>) -> Vec<$t> {
                    self.get_slice(key, sep, default)
                }
            )*
        }
    };
}

numeric_accessors! {
    int, int_slice => isize;
    int8, int8_slice => i8;
    int16, int16_slice => i16;
    int32, int32_slice => i32;
    int64, int64_slice => i64;
    uint, uint_slice => usize;
    uint8, uint8_slice => u8;
    uint16, uint16_slice => u16;
    uint32, uint32_slice => u32;
    uint64, uint64_slice => u64;
    float32, float32_slice => f32;
    float64, float64_slice => f64;
}

fn or_default<T>(key: &str, result: EnvResult<Option<T>>, default: T) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) => {
            trace!(key, "environment variable not set, using default");
            default
        }
        Err(error) => {
            debug!(key, %error, "rejected environment variable, using default");
            default
        }
    }
}

#[cfg(unix)]
fn os_bytes(raw: OsString) -> Option<Vec<u8>> {
    use std::os::unix::ffi::OsStringExt;
    Some(raw.into_vec())
}

#[cfg(not(unix))]
fn os_bytes(raw: OsString) -> Option<Vec<u8>> {
    raw.into_string().ok().map(String::into_bytes)
}

fn scale(magnitude: u64, unit: Duration) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let total = unit.as_nanos().saturating_mul(u128::from(magnitude));
    match u64::try_from(total / NANOS_PER_SEC) {
        // remainder is below one second so it fits in u32
        Ok(secs) => Duration::new(secs, (total % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}

//! Tunable parameters of the crate, read from environment variables.
//!
//! A [`SetParam`] holds the name of an environment variable together with a string representation
//! of its default value. The value is read once, on first access, and cached for the rest of
//! the process lifetime.
//!
//! ```
//! use valset::params::SetParam;
//! static SOME_PARAM: SetParam<u32> = SetParam::new("VALSET_DOC_PARAM", "4");
//!
//! // environment variable not set, the default value is used
//! assert_eq!(SOME_PARAM.get(), 4);
//! ```
//!
//! Changes to the environment variable after the first read are silently ignored.
//! [`SetParam::set`] forces the value before the first read and panics if the parameter
//! was already initialized.

use once_cell::sync::OnceCell;
use std::str::FromStr;

/// Capacity of a set created with [`ValSet::new`](crate::ValSet::new) when no valid
/// override is given.
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest accepted override of the initial capacity.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Number of elements a set created with [`ValSet::new`](crate::ValSet::new) can hold before
/// its first growth. Values outside `DEFAULT_CAPACITY..=MAX_INITIAL_CAPACITY` are ignored.
pub static INITIAL_CAPACITY: SetParam<usize> =
    SetParam::new_checked("VALSET_INITIAL_CAPACITY", "10", valid_initial_capacity);

fn valid_initial_capacity(capacity: &usize) -> bool {
    (DEFAULT_CAPACITY..=MAX_INITIAL_CAPACITY).contains(capacity)
}

fn any_value<T>(_: &T) -> bool {
    true
}

pub struct SetParam<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
    accept: fn(&T) -> bool,
}

impl<T> SetParam<T> {
    /// Creates a parameter initialized from the environment variable `env`, falling back
    /// to `default` when the variable is absent or unreadable.
    pub const fn new(env: &'static str, default: &'static str) -> SetParam<T> {
        SetParam::new_checked(env, default, any_value::<T>)
    }

    /// Same as [`SetParam::new`] but values read from the environment that do not satisfy
    /// `accept` are replaced by the default.
    pub const fn new_checked(
        env: &'static str,
        default: &'static str,
        accept: fn(&T) -> bool,
    ) -> SetParam<T> {
        SetParam {
            value: OnceCell::new(),
            env,
            default,
            accept,
        }
    }

    pub fn env_var(&self) -> &'static str {
        self.env
    }
}

impl<T: FromStr> SetParam<T> {
    fn read_default(&self) -> T {
        match T::from_str(self.default) {
            Ok(v) => v,
            Err(_) => panic!("[valset] {}: invalid default value \"{}\".", self.env, self.default),
        }
    }

    fn read(&self) -> T {
        match std::env::var(self.env) {
            Ok(raw) => match T::from_str(&raw) {
                Ok(value) if (self.accept)(&value) => value,
                Ok(_) => {
                    tracing::warn!(
                        param = self.env,
                        value = raw.as_str(),
                        default = self.default,
                        "parameter out of range, using default"
                    );
                    self.read_default()
                }
                Err(_) => {
                    tracing::warn!(
                        param = self.env,
                        value = raw.as_str(),
                        default = self.default,
                        "could not parse parameter, using default"
                    );
                    self.read_default()
                }
            },
            Err(std::env::VarError::NotPresent) => self.read_default(),
            Err(err) => {
                tracing::warn!(param = self.env, default = self.default, "{err}, using default");
                self.read_default()
            }
        }
    }

    /// Returns the value of the parameter, reading the environment on the first call.
    ///
    /// # Panic
    /// Panics if the variable is unset and the default value cannot be parsed.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| self.read())
    }

    /// Forces the parameter to the given value.
    ///
    /// # Panic
    /// Panics if the parameter was already initialized, typically by a previous read.
    pub fn set(&self, value: T) {
        if self.value.set(value).is_err() {
            panic!("Parameter {} is already initialized (i.e. was previously accessed).", self.env);
        }
    }
}

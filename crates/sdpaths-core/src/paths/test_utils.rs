//! Environment isolation for tests that read the `SDPATHS_*` variables.

use std::env;
use std::sync::Mutex;

/// Serializes every test that reads or writes `SDPATHS_*` variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets or clears one variable and puts the previous value back on drop.
///
/// Hold [`ENV_LOCK`] for as long as the guard lives.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub fn unset(key: &str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        write_var(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        write_var(&self.key, self.previous.as_deref());
    }
}

// Callers hold ENV_LOCK, so no other test thread touches the environment.
#[allow(unsafe_code)]
fn write_var(key: &str, value: Option<&str>) {
    match value {
        Some(value) => unsafe { env::set_var(key, value) },
        None => unsafe { env::remove_var(key) },
    }
}

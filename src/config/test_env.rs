use std::sync::{LazyLock, Mutex};

/// Held by every test that touches `DIGIKTAV_*` variables.
pub(super) static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets or clears one variable and restores the prior value on drop.
pub(super) struct ScopedEnv {
    key: &'static str,
    previous: Option<String>,
}

impl ScopedEnv {
    pub(super) fn new(key: &'static str, value: Option<&str>) -> Self {
        let previous = std::env::var(key).ok();
        apply(key, value);
        Self { key, previous }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        apply(self.key, self.previous.as_deref());
    }
}

fn apply(key: &str, value: Option<&str>) {
    // SAFETY: test-only; callers hold ENV_LOCK for the guard's lifetime.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

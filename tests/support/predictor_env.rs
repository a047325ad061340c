use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Sets predictor environment variables for the guard's lifetime.
pub struct PredictorEnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl PredictorEnvGuard {
    pub fn new() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        Self {
            previous: Vec::new(),
            _lock: lock,
        }
    }

    pub fn config_home(self, path: PathBuf) -> Self {
        self.set("PREDICTOR_CONFIG_HOME", Some(path.to_string_lossy().into_owned()))
    }

    pub fn api_url(self, url: Option<&str>) -> Self {
        self.set("PREDICTOR_API_URL", url.map(str::to_string))
    }

    fn set(mut self, key: &'static str, value: Option<String>) -> Self {
        self.previous.push((key, std::env::var(key).ok()));
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        self
    }
}

impl Drop for PredictorEnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

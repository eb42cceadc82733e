mod load;
mod validation;

use crate::{FlagRegistrar, FlagValue};

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => std::env::set_var(self.key, val),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Registrar fake that records every registration in order.
#[derive(Default)]
pub(crate) struct RecordingRegistrar {
    pub(crate) flags: Vec<(&'static str, FlagValue, &'static str)>,
}

impl RecordingRegistrar {
    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.flags.iter().map(|(name, _, _)| *name).collect()
    }

    pub(crate) fn default_of(&self, name: &str) -> Option<&FlagValue> {
        self.flags
            .iter()
            .find(|(flag, _, _)| *flag == name)
            .map(|(_, default, _)| default)
    }
}

impl FlagRegistrar for RecordingRegistrar {
    fn register_string(&mut self, name: &'static str, default: &str, usage: &'static str) {
        self.flags
            .push((name, FlagValue::String(default.to_string()), usage));
    }

    fn register_bool(&mut self, name: &'static str, default: bool, usage: &'static str) {
        self.flags.push((name, FlagValue::Bool(default), usage));
    }

    fn register_int(&mut self, name: &'static str, default: i64, usage: &'static str) {
        self.flags.push((name, FlagValue::Int(default), usage));
    }

    fn register_string_list(&mut self, name: &'static str, default: &[String], usage: &'static str) {
        self.flags
            .push((name, FlagValue::StringList(default.to_vec()), usage));
    }
}

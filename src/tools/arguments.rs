//! Typed access to tool call arguments.

use crate::error::FinderError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, FinderError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| FinderError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an integer argument.
    ///
    /// Models sometimes send whole numbers as floats (`5.0`); those are accepted.
    pub fn get_i64(&self, key: &str) -> Result<i64, FinderError> {
        self.value
            .get(key)
            .and_then(|v| {
                v.as_i64().or_else(|| {
                    v.as_f64()
                        .filter(|f| f.fract() == 0.0)
                        .map(|f| f as i64)
                })
            })
            .ok_or_else(|| FinderError::InvalidArgument(format!("Missing integer argument: {key}")))
    }

    /// Get an integer argument, falling back to `default` when absent or null.
    pub fn get_i64_or(&self, key: &str, default: i64) -> Result<i64, FinderError> {
        match self.value.get(key) {
            None | Some(serde_json::Value::Null) => Ok(default),
            Some(_) => self.get_i64(key),
        }
    }
}

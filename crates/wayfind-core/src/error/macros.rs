//! Error macros for wayfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfindError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid config errors
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::WayfindError::invalid_config(format!($($arg)*)))
    };
}

/// Log with format string support
///
/// ```
/// tana_stdio::logf!("build", "compiled {} files in {}ms", 42, 150);
/// ```
#[macro_export]
macro_rules! logf {
    ($action:expr, $($arg:tt)*) => {
        $crate::log($action, &::std::format!($($arg)*))
    };
}

/// Error with format string support
///
/// ```
/// tana_stdio::errorf!("deploy", "{} of {} targets failed", 1, 3);
/// ```
#[macro_export]
macro_rules! errorf {
    ($action:expr, $($arg:tt)*) => {
        $crate::error($action, &::std::format!($($arg)*))
    };
}

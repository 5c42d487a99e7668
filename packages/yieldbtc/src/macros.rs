/// Assert a condition inside a contract entry point, logging the failure
/// site before aborting with the given error code.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {{
        if !($assert) {
            let error_code: $crate::error::ErrorCode = $err;
            soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code, file!(), line!());
            soroban_sdk::panic_with_error!($env, error_code);
        }
    }};
    ($env:expr, $assert:expr, $err:expr, $($arg:tt)+) => {{
        if !($assert) {
            let error_code: $crate::error::ErrorCode = $err;
            soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code, file!(), line!());
            soroban_sdk::log!($env, $($arg)+);
            soroban_sdk::panic_with_error!($env, error_code);
        }
    }};
}

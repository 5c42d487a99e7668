use soroban_sdk::{log, panic_with_error, Env};

use crate::error::ErrorCode;

/// Checked arithmetic that aborts the invocation with `MathError` on
/// overflow or division by zero.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> Self;
    fn safe_sub(self, rhs: Self, env: &Env) -> Self;
    fn safe_mul(self, rhs: Self, env: &Env) -> Self;
    fn safe_div(self, rhs: Self, env: &Env) -> Self;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> $t {
                match self.checked_add(v) {
                    Some(result) => result,
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        panic_with_error!(env, ErrorCode::MathError);
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> $t {
                match self.checked_sub(v) {
                    Some(result) => result,
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        panic_with_error!(env, ErrorCode::MathError);
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> $t {
                match self.checked_mul(v) {
                    Some(result) => result,
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        panic_with_error!(env, ErrorCode::MathError);
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> $t {
                match self.checked_div(v) {
                    Some(result) => result,
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        panic_with_error!(env, ErrorCode::MathError);
                    }
                }
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(u128);
checked_impl!(i128);

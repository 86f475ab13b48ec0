// std::borrow::Cow
// std::option::Option

/// This macro extracts owned value from cow
/// but if cow is borrowed it returns default given value
///
/// it's helpful when function returns `Cow<'_, T>` as result,
/// where `Cow::Borrowed` option marks that value was not modified
/// and we can use owned original instead of copying it.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

/// Returns early from a lenient entry point with the given failure value,
/// tracing the reason first.
///
/// Lenient entry points (`validate`, `parse`, `detect_operator`) never
/// surface the reason to the caller, so this is the only place it is seen.
macro_rules! ok_or_trace {
    ($result:expr, $input:expr, $fallback:expr) => {{
        match $result {
            Ok(value) => value,
            Err(err) => {
                log::trace!("Rejected '{}': {}", $input, err);
                return $fallback;
            }
        }
    }};
}

pub(crate) use owned_from_cow_or;
pub(crate) use ok_or_trace;

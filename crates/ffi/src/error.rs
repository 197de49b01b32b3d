use behave_core::{EnglishMessages, EqError};
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// An error that can cross the C boundary as a code plus message.
pub(crate) trait BehaveError {
    fn code(&self) -> BehaveErrorCode;

    fn msg(&self) -> &str;
}

/// Error code plus message for every failure the FFI layer reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultBehaveError {
    code: BehaveErrorCode,
    msg: String,
}

impl DefaultBehaveError {
    /// `param_name` was null, e.g. `"out_instance"` or `"name"`.
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: BehaveErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// A writer panicked while holding `lock_name`.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: BehaveErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// `param_name` holds bytes that are not UTF-8.
    pub fn invalid_string(param_name: &str) -> Self {
        Self {
            code: BehaveErrorCode::InvalidString,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }
}

impl From<EqError> for DefaultBehaveError {
    fn from(error: EqError) -> Self {
        let code = match error {
            EqError::UnknownVariable(_) | EqError::UnknownFunction(_) | EqError::UnknownProperty(_) => {
                BehaveErrorCode::UnknownName
            }
            EqError::Config(_) | EqError::PropertyType { .. } => BehaveErrorCode::InvalidConfig,
            EqError::ItemOutOfRange { .. } => BehaveErrorCode::InvalidValue,
            _ => BehaveErrorCode::Calculation,
        };
        Self {
            code,
            msg: error.localized(&EnglishMessages),
        }
    }
}

impl BehaveError for DefaultBehaveError {
    fn code(&self) -> BehaveErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Status of every worksheet call; zero means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaveErrorCode {
    Ok = 0,

    /// A required pointer argument was null.
    NullPointer = 1,

    /// The worksheet lock was poisoned.
    LockPoisoned = 2,

    /// A string argument was not valid UTF-8.
    InvalidString = 3,

    /// No variable, node or property has the given name.
    UnknownName = 4,

    /// A discrete item index or entry text does not fit the variable.
    InvalidValue = 5,

    /// Configuration text could not be parsed or holds a mistyped value.
    InvalidConfig = 6,

    /// A node failed during calculation; earlier results are kept.
    Calculation = 7,
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The CString is owned here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, BehaveErrorCode)> = const { RefCell::new((None, BehaveErrorCode::Ok)) };
}

pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, BehaveErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, BehaveErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Message of the last failed call on this thread, or null after a success.
///
/// The string is owned by the library and stays valid until the next call
/// on the same thread. Do not free it.
///
/// ```cpp
/// if (behave_calculate(sheet) != BehaveErrorCode::Ok) {
///     fprintf(stderr, "calculate: %s\n", behave_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn behave_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Code of the last call on this thread.
#[no_mangle]
pub extern "C" fn behave_get_last_error_code() -> BehaveErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

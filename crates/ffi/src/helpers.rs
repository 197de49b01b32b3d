use crate::error::{with_last_error_mut, BehaveError, BehaveErrorCode, DefaultBehaveError};
use crate::instance::BehaveInstance;
use behave_core::ComputationGraph;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl BehaveError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl BehaveError) -> BehaveErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = BehaveErrorCode::Ok;
    });
}

/// Runs `f` and converts its outcome into an error code, recording failures.
pub(crate) fn track_result<F>(f: F) -> BehaveErrorCode
where
    F: FnOnce() -> Result<(), DefaultBehaveError>,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            BehaveErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow the instance behind `ptr`.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_new`.
pub(crate) unsafe fn instance_from_ptr<'a>(ptr: *const BehaveInstance) -> Result<&'a BehaveInstance, DefaultBehaveError> {
    // SAFETY: non-null pointers come from Box::into_raw in behave_new
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultBehaveError::null_pointer("instance"))
}

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string that outlives `'a`.
pub(crate) unsafe fn str_from_ptr<'a>(ptr: *const c_char, param_name: &str) -> Result<&'a str, DefaultBehaveError> {
    if ptr.is_null() {
        return Err(DefaultBehaveError::null_pointer(param_name));
    }
    // SAFETY: checked non-null above; the caller guarantees termination
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| DefaultBehaveError::invalid_string(param_name))
}

/// Write `value` through an out-parameter.
///
/// # Safety
/// `out` must be null or valid for writes.
pub(crate) unsafe fn write_out<T>(out: *mut T, value: T, param_name: &str) -> Result<(), DefaultBehaveError> {
    if out.is_null() {
        return Err(DefaultBehaveError::null_pointer(param_name));
    }
    // SAFETY: checked non-null above
    unsafe { out.write(value) };
    Ok(())
}

/// Read the graph under the shared lock.
pub(crate) fn with_graph<F, T>(instance: &BehaveInstance, f: F) -> Result<T, DefaultBehaveError>
where
    F: FnOnce(&ComputationGraph) -> Result<T, DefaultBehaveError>,
{
    let graph = instance
        .graph
        .read()
        .map_err(|_| DefaultBehaveError::lock_poisoned("RwLock"))?;
    f(&graph)
}

/// Modify the graph under the exclusive lock.
pub(crate) fn with_graph_mut<F, T>(instance: &BehaveInstance, f: F) -> Result<T, DefaultBehaveError>
where
    F: FnOnce(&mut ComputationGraph) -> Result<T, DefaultBehaveError>,
{
    let mut graph = instance
        .graph
        .write()
        .map_err(|_| DefaultBehaveError::lock_poisoned("RwLock"))?;
    f(&mut graph)
}

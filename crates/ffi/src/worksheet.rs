use std::os::raw::c_char;

use crate::error::{BehaveErrorCode, DefaultBehaveError};
use crate::helpers::{instance_from_ptr, str_from_ptr, track_result, with_graph, with_graph_mut, write_out};
use crate::instance::BehaveInstance;

/// Set a variable's value in its native units.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn behave_set_value(
    ptr: *const BehaveInstance,
    name: *const c_char,
    value: f64,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        with_graph_mut(instance, |graph| Ok(graph.set_value(name, value)?))
    })
}

/// Read a variable's value in its native units.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
/// - `out_value` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_get_value(
    ptr: *const BehaveInstance,
    name: *const c_char,
    out_value: *mut f64,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        let value = with_graph(instance, |graph| Ok(graph.variable(name)?.native()))?;
        unsafe { write_out(out_value, value, "out_value") }
    })
}

/// Select item `index` of a discrete variable.
///
/// Returns `InvalidValue` when `index` is past the item list.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn behave_set_item(
    ptr: *const BehaveInstance,
    name: *const c_char,
    index: usize,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        with_graph_mut(instance, |graph| Ok(graph.set_item(name, index)?))
    })
}

/// Store entry text on a variable.
///
/// Continuous and list entries are read in display units, discrete entries
/// select the item of that name and text variables keep the text as is.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` and `text` must be null or null-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn behave_set_text(
    ptr: *const BehaveInstance,
    name: *const c_char,
    text: *const c_char,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        let text = unsafe { str_from_ptr(text, "text") }?;
        with_graph_mut(instance, |graph| Ok(graph.set_text(name, text)?))
    })
}

/// Run every active node in execution order.
///
/// Stops at the first failing node; values written before it are kept.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_calculate(ptr: *const BehaveInstance) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_graph_mut(instance, |graph| graph.calculate().map_err(DefaultBehaveError::from))
    })
}

/// Whether the node called `name` is active.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
/// - `out_active` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_is_active(
    ptr: *const BehaveInstance,
    name: *const c_char,
    out_active: *mut bool,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        let active = with_graph(instance, |graph| Ok(graph.is_active(name)?))?;
        unsafe { write_out(out_active, active, "out_active") }
    })
}

/// Whether the variable called `name` is currently shown as a result.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
/// - `out_output` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_is_user_output(
    ptr: *const BehaveInstance,
    name: *const c_char,
    out_output: *mut bool,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        let shown = with_graph(instance, |graph| Ok(graph.variable(name)?.is_user_output))?;
        unsafe { write_out(out_output, shown, "out_output") }
    })
}

/// Number of leaf inputs the active nodes still need.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `out_count` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_active_input_count(
    ptr: *const BehaveInstance,
    out_count: *mut usize,
) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let count = with_graph(instance, |graph| Ok(graph.active_inputs().len()))?;
        unsafe { write_out(out_count, count, "out_count") }
    })
}

use behave_core::{PropValue, PropertyDict};
use std::os::raw::c_char;

use crate::error::{BehaveErrorCode, DefaultBehaveError};
use crate::helpers::{instance_from_ptr, str_from_ptr, track_result, with_graph_mut};
use crate::instance::BehaveInstance;

/// Replace one property of the worksheet configuration.
///
/// Takes effect at the next `behave_reconfigure`.
///
/// # Safety
/// Same contract as the exported setters.
unsafe fn set_property(ptr: *const BehaveInstance, name: *const c_char, value: PropValue) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { str_from_ptr(name, "name") }?;
        with_graph_mut(instance, |graph| {
            let mut props = graph.config().props().clone();
            props.set_by_name(name, value)?;
            graph.set_properties(props);
            Ok(())
        })
    })
}

/// Set a boolean configuration property such as `"crownModuleActive"`.
///
/// Returns `UnknownName` for an unregistered property and `InvalidConfig`
/// when the property holds an integer.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn behave_set_property_bool(
    ptr: *const BehaveInstance,
    name: *const c_char,
    value: bool,
) -> BehaveErrorCode {
    unsafe { set_property(ptr, name, PropValue::Bool(value)) }
}

/// Set an integer configuration property such as `"containConfMaxSteps"`.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `name` must be null or a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn behave_set_property_int(
    ptr: *const BehaveInstance,
    name: *const c_char,
    value: i64,
) -> BehaveErrorCode {
    unsafe { set_property(ptr, name, PropValue::Int(value)) }
}

/// Replace the whole configuration with TOML text.
///
/// Properties missing from `toml` take their defaults.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_new`.
/// - `toml` must be null or a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn behave_load_config(ptr: *const BehaveInstance, toml: *const c_char) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let text = unsafe { str_from_ptr(toml, "toml") }?;
        let props = PropertyDict::from_toml_str(text)?;
        with_graph_mut(instance, |graph| {
            graph.set_properties(props);
            Ok(())
        })
    })
}

/// Apply the configuration to node activation and variable masks.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_reconfigure(ptr: *const BehaveInstance) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_graph_mut(instance, |graph| graph.reconfigure().map_err(DefaultBehaveError::from))
    })
}

/// Deactivate every node and clear every variable mask.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_clear_activation(ptr: *const BehaveInstance) -> BehaveErrorCode {
    track_result(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_graph_mut(instance, |graph| {
            graph.clear_activation();
            Ok(())
        })
    })
}

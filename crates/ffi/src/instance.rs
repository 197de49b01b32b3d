use behave_core::ComputationGraph;
use std::ptr;
use std::sync::RwLock;

use crate::error::{BehaveErrorCode, DefaultBehaveError};
use crate::helpers::{track_error, track_result};

/// One fire-behavior worksheet: configuration, variables and nodes.
///
/// # Thread Safety
/// The graph sits behind an `RwLock`:
/// - **Concurrent readers**: value and flag queries take `.read()`
/// - **Exclusive writer**: configuration, entry and calculation take `.write()`
///
/// # Usage
/// ```cpp
/// BehaveInstance* sheet = nullptr;
/// if (behave_new(&sheet) != BehaveErrorCode::Ok) {
///     return;
/// }
/// behave_set_property_bool(sheet, "crownModuleActive", true);
/// behave_reconfigure(sheet);
/// behave_set_text(sheet, "vSurfaceFuelBedModel", "4");
/// behave_set_value(sheet, "vWindSpeedAtMidflame", 5.0);
/// behave_calculate(sheet);
/// double ros = 0.0;
/// behave_get_value(sheet, "vSurfaceFireSpreadAtHead", &ros);
/// behave_destroy(sheet);
/// ```
pub struct BehaveInstance {
    pub(crate) graph: RwLock<ComputationGraph>,
}

impl BehaveInstance {
    /// Creates a worksheet over the standard fuel and moisture catalogs.
    pub(crate) fn new() -> Result<Box<Self>, DefaultBehaveError> {
        let graph = ComputationGraph::standard()?;
        Ok(Box::new(Self {
            graph: RwLock::new(graph),
        }))
    }
}

/// Create a new worksheet and return it via out-parameter.
///
/// Every module is configured from the default properties but nothing is
/// active until `behave_reconfigure` runs.
///
/// Returns
/// - `BehaveErrorCode::Ok` (0) — success, `out_instance` contains valid pointer
/// - `BehaveErrorCode::NullPointer` — `out_instance` is null
///
/// # Safety
///
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller takes ownership of the returned instance and MUST call `behave_destroy`
///   exactly once.
#[no_mangle]
pub unsafe extern "C" fn behave_new(out_instance: *mut *mut BehaveInstance) -> BehaveErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultBehaveError::null_pointer("out_instance"));
    }

    let mut created = ptr::null_mut();
    let code = track_result(|| {
        created = Box::into_raw(BehaveInstance::new()?);
        Ok(())
    });
    // SAFETY: checked non-null above; null is written on failure
    unsafe {
        *out_instance = created;
    }
    code
}

/// Destroys a worksheet previously created by `behave_new`.
///
/// If `ptr` is null, this function is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `behave_new` and not freed already.
/// - After calling this function, the caller must not use the pointer again.
#[no_mangle]
pub unsafe extern "C" fn behave_destroy(ptr: *mut BehaveInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: the pointer came from Box::into_raw in behave_new
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

//! C ABI over the fire-behavior worksheet.
//!
//! Every call returns a [`BehaveErrorCode`]; on failure the message is kept
//! per thread and read back with [`behave_get_last_error`]. Values cross the
//! boundary in native units, entry text in display units.

mod configure;
mod error;
mod helpers;
mod instance;
mod worksheet;

pub use configure::{
    behave_clear_activation, behave_load_config, behave_reconfigure, behave_set_property_bool,
    behave_set_property_int,
};
pub use error::{behave_get_last_error, behave_get_last_error_code, BehaveErrorCode};
pub use instance::{behave_destroy, behave_new, BehaveInstance};
pub use worksheet::{
    behave_active_input_count, behave_calculate, behave_get_value, behave_is_active, behave_is_user_output,
    behave_set_item, behave_set_text, behave_set_value,
};

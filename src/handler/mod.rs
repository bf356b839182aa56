//! Single request/response translate handler

pub mod translate;

pub use translate::{decode_request, encode_response, handle, handle_bytes, read_first_value, run};

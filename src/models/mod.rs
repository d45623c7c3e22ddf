pub mod request_log;

pub use request_log::RequestLog;

use serde::Deserialize;

/// Request body shared by the two inference endpoints.
#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
}

mod adapter;
mod event;

pub use adapter::{InvocationAdapter, LAMBDA_INTERNAL_ERROR_MESSAGE, function_handler};
pub use event::{EventBody, InvocationEvent, InvocationResult};

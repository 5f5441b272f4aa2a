pub mod errors;
pub mod html;

pub use errors::html_error_response;

// Normal HTML response plus the one static asset we serve
pub use html::{css_response, html_response};

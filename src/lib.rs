pub mod error;
pub mod layout;
pub mod manifest;
pub mod npm;
pub mod pipeline;
pub mod request;
pub mod template;

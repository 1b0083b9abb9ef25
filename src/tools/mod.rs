//! Tool implementations shared by CLI and HTTP modes

pub mod search;

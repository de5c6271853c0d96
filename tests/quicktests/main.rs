//! Property tests against the public API.

mod ordered;
mod scenarios;

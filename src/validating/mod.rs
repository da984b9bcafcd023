//! Checking expressions against a project's DRS specifications

mod validator;

pub use validator::*;

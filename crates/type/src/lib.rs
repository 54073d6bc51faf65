// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use value::r#type::Type;
pub use value::{Record, Value};

pub mod error;
pub mod value;

// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub mod diagnostic;

use diagnostic::Diagnostic;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
    type Target = Diagnostic;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Error {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.render().as_str())
    }
}

impl Error {
    pub fn diagnostic(self) -> Diagnostic {
        self.0
    }

    pub fn code(&self) -> &str {
        self.0.code.as_str()
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! error {
    ($diagnostic:expr) => {
        $crate::Error($diagnostic)
    };
}

#[macro_export]
macro_rules! return_error {
    ($diagnostic:expr) => {
        return Err($crate::error!($diagnostic))
    };
}

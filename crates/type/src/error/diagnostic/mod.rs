// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

pub mod decode;
pub mod lookup;
pub mod schema;
pub mod value;

mod util;

/// A structured failure report. Every error in the crate carries exactly one
/// diagnostic; the stable `code` is the piece peers and tests match on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub label: Option<String>,
    pub help: Option<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn render(&self) -> String {
        let mut out = format!("{}: {}", self.code, self.message);
        if let Some(label) = &self.label {
            out.push_str("\n  ");
            out.push_str(label);
        }
        if let Some(help) = &self.help {
            out.push_str("\n  help: ");
            out.push_str(help);
        }
        for note in &self.notes {
            out.push_str("\n  note: ");
            out.push_str(note);
        }
        out
    }
}

//! Codes command implementation

use crate::console::CliConsole;
use faultline_core::codes;

/// Print every reserved code with the kind that owns it
pub fn show_codes(console: &CliConsole) {
    console.header("Reserved error codes");

    for (name, code) in codes::RESERVED {
        let owner = codes::classify(*code)
            .map(|kind| kind.as_str())
            .unwrap_or("unclassified");
        console.row(name, &format!("{:>5}  {}", code, owner));
    }
}

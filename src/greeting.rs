//! The hello-world greeting.

use std::io::{self, Write};

use crate::constants::GREETING;

/// Write the greeting followed by a newline.
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}

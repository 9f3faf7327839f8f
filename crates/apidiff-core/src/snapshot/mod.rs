//! Snapshot parsing.
//!
//! A snapshot is a directory tree in which every file lists the public
//! members of one class, one declaration per line:
//!
//! ```text
//! public class com.example.Widget {
//!   public com.example.Widget();
//!   public void draw(int) throws java.io.IOException;
//!   public int color;
//! }
//! ```
//!
//! Every line but the last loses its surrounding whitespace and its final
//! character (`;` or `{`) and is classified. The last line is the closing
//! delimiter and is never read. The first declaration names the declaring
//! class for all symbols of the file.

pub mod parser;

pub use parser::{declaration_text, parse_listing, parse_snapshot, ParseOptions};

pub mod assemble;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod validate;


// Re-export key types for easier usage
pub use error::ParseError;
pub use io::*;
pub use models::*;
pub use parsing::{ReadmeParser, lines::ReadmeSource, parse_readme, parse_readme_contents};
pub use render::{MarkdownRenderer, PulldownRenderer, RenderOptions};
pub use validate::{Diagnostic, ValidationReport, validate};

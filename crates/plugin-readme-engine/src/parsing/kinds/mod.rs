pub mod section_heading;
pub mod version_heading;

pub use section_heading::{KnownSection, SectionHeading};
pub use version_heading::VersionHeading;

pub mod readme;

pub use readme::{ReadmeRecord, SHORT_DESCRIPTION_LIMIT, SectionMap, UNVERSIONED};

mod certifications;
mod education;
mod experiences;
mod section_handlers;
mod skills;

pub use certifications::*;
pub use education::*;
pub use experiences::*;
pub use skills::*;

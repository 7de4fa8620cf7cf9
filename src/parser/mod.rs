pub mod frontmatter;
pub mod markdown;
pub mod model;
pub mod slug;

pub use frontmatter::{parse_frontmatter, split_frontmatter, strip_frontmatter, FrontmatterError};
pub use model::{FieldValue, Frontmatter};
pub use slug::create_slug;

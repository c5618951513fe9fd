pub mod events;
pub mod lookup;
pub mod options;
pub mod reference;

pub use events::{Unresolved, UnresolvedAction};
pub use lookup::IdentifierIndex;
pub use options::{ConvertOptions, MissingPolicy, DEFAULT_STANDARD};
pub use reference::ReferenceTable;

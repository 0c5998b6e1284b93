pub use crate::entry::VocabularyEntry;
pub use crate::filter_types::{FilterQuery, FilterScope, Letter};
pub use crate::identity::Identity;
pub use crate::ids::{EntryId, UserId};
pub use crate::preferences::{DisplayToggle, PreferenceKey, PreferenceSet};

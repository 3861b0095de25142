mod element;
mod entry;
mod target;

pub use element::{
    CITATION_CLASS, CITEKEYS_ATTR, ClickedElement, LINK_CLASS, Point, PointerEvent,
    SPELL_ERROR_CLASS, TITLE_ATTR,
};
pub use entry::{EntryId, EntryKind, MenuEntry, flatten};
pub use target::TargetType;

//! Building, presenting and resolving the editor context menu.

mod builder;
mod display;
mod dispatch;
mod session;
mod template;

pub use builder::{
    BuildOptions, BuiltMenu, MAILTO_PREFIX, MenuBuilder, SelectionEffect, parse_citekeys,
};
pub use display::{ContextMenu, apply_selection};
pub use dispatch::{Dispatched, EditorCallbacks, dispatch};
pub use session::MenuSession;
pub use template::{READ_ONLY_DISABLED, TEXT_TEMPLATE, TemplateEntry, TemplateRegistry};

//! Context-sensitive popup menus for a Markdown editing surface.
//!
//! A secondary click is classified by what it hit (plain text, a rendered
//! link or citation, a misspelled word, an image), turned into a menu tree,
//! handed to a [`services::MenuPresenter`], and the user's choice is
//! dispatched back to the editor and its collaborators.

pub mod config;
pub mod core;
mod error;
pub mod i18n;
pub mod menu;
#[cfg(all(feature = "native-menu", not(target_os = "linux")))]
pub mod native;
pub mod services;

pub use error::MenuError;

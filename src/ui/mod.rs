//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, command prompt, autoplay
//! - **[`panes`]**: stateless render functions for each visible pane (structure,
//!   trace, prompt, status bar)
//! - **[`layout`]**: grid placement for tree nodes
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::engine::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod layout;
pub mod panes;
pub mod theme;

pub use app::App;

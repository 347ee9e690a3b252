//! Chat region.
//!
//! Presentational placeholders for the conversational widget: layout and
//! structure only, with no transport or session state behind them.

mod header;
mod input_area;
mod message_list;
mod shell;

pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use message_list::ChatMessageList;
pub use shell::Chat;

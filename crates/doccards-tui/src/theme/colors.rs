use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const CARD_BORDER: Color = Color::DarkGray;
pub const ATTACHED_BORDER: Color = Color::Green;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const FILE_DETAIL_TEXT: Color = Color::LightGreen;

pub const TAG_BLUE: Color = Color::Blue;
pub const TAG_GREEN: Color = Color::Green;
pub const TAG_PLAIN: Color = Color::Gray;

pub const POPUP_BG: Color = Color::Black;

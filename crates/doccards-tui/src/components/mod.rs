pub mod banner;
pub mod card_tile;
pub mod popup;

pub use banner::{Banner, BannerVariant};
pub use card_tile::{render_card_tile, TILE_HEIGHT, TILE_WIDTH};
pub use popup::{centered_rect, render_confirm_popup, render_text_popup};

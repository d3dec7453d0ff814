mod props;
mod widget;

pub use props::{demo_cards, CardAction, CardProps};
pub use widget::CardGallery;

pub mod channel;
pub mod image;

pub use channel::ChannelOrder;
pub use self::image::{load_resized, resize_square, ResizeFilter};

pub mod frame_loop;
pub mod timeline;

pub use frame_loop::FrameLoop;
pub use timeline::{Direction, Ease, Frame, Position, Timeline};

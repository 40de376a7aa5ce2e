//! Decorative page effects, ticked by the shell's clock.

pub mod carousel;
pub mod typewriter;
pub mod video_player;

pub use carousel::Carousel;
pub use typewriter::{Typewriter, TypewriterTiming};
pub use video_player::{PlayerCommand, VideoPlayer};

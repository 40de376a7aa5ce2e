//! Navigation state machines (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod dropdown;
pub mod hover;
pub mod toast;
pub mod visibility;

// Re-export for convenience
pub use dropdown::{DropdownPositioner, LayoutProbe, SettleRequest, SettleStrategy};
pub use hover::{HoverMachine, HoverSignal, HoverState, HoverTarget};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use visibility::{
    is_in_hero, NavbarPresentation, VisibilityController, VisibilityTransition, NAVBAR_HEIGHT,
};

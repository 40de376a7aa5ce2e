//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up by one step. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one step. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Smooth-scroll back to the top of the page. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the page. Default: G/End
    ScrollToBottom,

    // History
    /// Go back in route history. Default: [
    HistoryBack,
    /// Go forward in route history. Default: ]
    HistoryForward,

    // Menu focus (keyboard equivalent of hovering)
    /// Open the next top-level menu. Default: Tab
    FocusNextMenu,
    /// Open the previous top-level menu. Default: Shift+Tab
    FocusPrevMenu,
    /// Close any open menu. Default: Esc
    CloseMenu,

    // Widgets
    /// Give keyboard focus to the showcase video player. Default: v
    FocusPlayer,
    /// Advance the testimonial carousel. Default: .
    CarouselNext,
    /// Rewind the testimonial carousel. Default: ,
    CarouselPrev,
    /// Send the sample contact request (contact page only). Default: Enter
    SendContact,

    // Application
    /// Quit the preview. Default: q
    Quit,
}

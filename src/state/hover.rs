//! Hover/Focus State Machine for the mega-menu.
//!
//! At most one menu key is hovered at a time. The panel stays open while the
//! pointer is on either the trigger or the panel itself, so the user can move
//! from one to the other without it collapsing.

use crate::model::MenuKey;
use tracing::debug;

/// Current hover state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No panel open.
    #[default]
    Idle,
    /// A panel is open for `key`.
    Hovering {
        /// Hovered menu key.
        key: MenuKey,
        /// Pointer is over the trigger.
        on_trigger: bool,
        /// Pointer is over the open panel.
        on_panel: bool,
    },
}

/// Signals emitted on hover transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverSignal {
    /// A panel opened from idle.
    PanelOpened(MenuKey),
    /// The open panel was replaced directly by another.
    PanelSwitched {
        /// Previously hovered key.
        from: MenuKey,
        /// Newly hovered key.
        to: MenuKey,
    },
    /// The panel closed.
    PanelClosed(MenuKey),
}

impl HoverSignal {
    /// Key whose panel is open after this signal, if any.
    pub fn opened_key(&self) -> Option<&MenuKey> {
        match self {
            Self::PanelOpened(key) => Some(key),
            Self::PanelSwitched { to, .. } => Some(to),
            Self::PanelClosed(_) => None,
        }
    }
}

/// What the pointer is over, as reported by hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// A top-level menu trigger.
    Trigger(MenuKey),
    /// The open mega-menu panel.
    Panel,
}

/// The hover machine.
#[derive(Debug, Clone, Default)]
pub struct HoverMachine {
    state: HoverState,
}

impl HoverMachine {
    /// Starts idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Hovered key, if any.
    pub fn hovered(&self) -> Option<&MenuKey> {
        match &self.state {
            HoverState::Idle => None,
            HoverState::Hovering { key, .. } => Some(key),
        }
    }

    /// Pointer entered the trigger for `key`.
    pub fn enter_trigger(&mut self, key: MenuKey) -> Option<HoverSignal> {
        let signal = match &self.state {
            HoverState::Idle => Some(HoverSignal::PanelOpened(key.clone())),
            HoverState::Hovering { key: current, .. } if *current == key => None,
            HoverState::Hovering { key: current, .. } => Some(HoverSignal::PanelSwitched {
                from: current.clone(),
                to: key.clone(),
            }),
        };
        self.state = HoverState::Hovering {
            key,
            on_trigger: true,
            on_panel: false,
        };
        self.log(&signal);
        signal
    }

    /// Pointer left the trigger for `key`.
    pub fn leave_trigger(&mut self, key: &MenuKey) -> Option<HoverSignal> {
        if let HoverState::Hovering {
            key: current,
            on_trigger,
            ..
        } = &mut self.state
        {
            if current == key {
                *on_trigger = false;
            }
        }
        self.settle()
    }

    /// Pointer entered the open panel. Ignored while idle: no panel is shown.
    pub fn enter_panel(&mut self) {
        if let HoverState::Hovering { on_panel, .. } = &mut self.state {
            *on_panel = true;
        }
    }

    /// Pointer left the open panel.
    pub fn leave_panel(&mut self) -> Option<HoverSignal> {
        if let HoverState::Hovering { on_panel, .. } = &mut self.state {
            *on_panel = false;
        }
        self.settle()
    }

    /// Drive the machine from a hit-test result for the current pointer
    /// position. `None` means the pointer is over neither a trigger nor the
    /// panel.
    pub fn pointer_over(&mut self, target: Option<HoverTarget>) -> Option<HoverSignal> {
        match target {
            Some(HoverTarget::Trigger(key)) => self.enter_trigger(key),
            Some(HoverTarget::Panel) => {
                if let HoverState::Hovering {
                    on_trigger,
                    on_panel,
                    ..
                } = &mut self.state
                {
                    *on_trigger = false;
                    *on_panel = true;
                }
                None
            }
            None => {
                if let HoverState::Hovering {
                    on_trigger,
                    on_panel,
                    ..
                } = &mut self.state
                {
                    *on_trigger = false;
                    *on_panel = false;
                }
                self.settle()
            }
        }
    }

    /// Close any open panel unconditionally (Escape, navigation, bar hidden).
    pub fn close(&mut self) -> Option<HoverSignal> {
        let signal = match std::mem::take(&mut self.state) {
            HoverState::Idle => None,
            HoverState::Hovering { key, .. } => Some(HoverSignal::PanelClosed(key)),
        };
        self.log(&signal);
        signal
    }

    fn settle(&mut self) -> Option<HoverSignal> {
        match &self.state {
            HoverState::Hovering {
                on_trigger: false,
                on_panel: false,
                ..
            } => self.close(),
            _ => None,
        }
    }

    fn log(&self, signal: &Option<HoverSignal>) {
        if let Some(signal) = signal {
            debug!(?signal, "Hover transition");
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;

//! Showcase video player state and its keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Seek distance for the arrow keys.
pub const SHORT_SEEK: Duration = Duration::from_secs(5);

/// Seek distance for `j`/`l`.
pub const LONG_SEEK: Duration = Duration::from_secs(10);

/// Volume change for the up/down keys, in percent.
pub const VOLUME_STEP: u8 = 10;

/// A player command, as bound to keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Play or pause.
    TogglePlay,
    /// Seek backwards.
    SeekBackward(Duration),
    /// Seek forwards.
    SeekForward(Duration),
    /// Raise volume by a step.
    VolumeUp,
    /// Lower volume by a step.
    VolumeDown,
    /// Mute or unmute.
    ToggleMute,
    /// Enter or leave fullscreen.
    ToggleFullscreen,
    /// Jump to the given tenth of the media (0-9).
    JumpToTenth(u8),
}

impl PlayerCommand {
    /// Shortcut table: Space/`k` play-pause, arrows seek 5s, `j`/`l` seek
    /// 10s, up/down volume, `m` mute, `f` fullscreen, digits jump.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        let command = match key.code {
            KeyCode::Char(' ') | KeyCode::Char('k') => Self::TogglePlay,
            KeyCode::Left => Self::SeekBackward(SHORT_SEEK),
            KeyCode::Right => Self::SeekForward(SHORT_SEEK),
            KeyCode::Char('j') => Self::SeekBackward(LONG_SEEK),
            KeyCode::Char('l') => Self::SeekForward(LONG_SEEK),
            KeyCode::Up => Self::VolumeUp,
            KeyCode::Down => Self::VolumeDown,
            KeyCode::Char('m') => Self::ToggleMute,
            KeyCode::Char('f') => Self::ToggleFullscreen,
            KeyCode::Char(c) => {
                let digit = c.to_digit(10)?;
                Self::JumpToTenth(u8::try_from(digit).ok()?)
            }
            _ => return None,
        };
        Some(command)
    }
}

/// Playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPlayer {
    duration: Duration,
    position: Duration,
    playing: bool,
    volume_percent: u8,
    muted: bool,
    fullscreen: bool,
    last_tick: Option<Duration>,
}

impl VideoPlayer {
    /// Paused at the start, full volume.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            position: Duration::ZERO,
            playing: false,
            volume_percent: 100,
            muted: false,
            fullscreen: false,
            last_tick: None,
        }
    }

    /// Media length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Playback position.
    pub fn position(&self) -> Duration {
        self.position
    }

    /// True while playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Volume setting in `[0, 1]`, kept while muted.
    pub fn volume(&self) -> f64 {
        f64::from(self.volume_percent) / 100.0
    }

    /// Volume actually heard.
    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume()
        }
    }

    /// True when muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// True in fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Played fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.position.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Start playing; at the end, restart from the beginning.
    pub fn play(&mut self) {
        if self.position >= self.duration {
            self.position = Duration::ZERO;
        }
        self.playing = !self.duration.is_zero();
        self.last_tick = None;
    }

    /// Pause.
    pub fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    /// Seek to `position`, clamped to the media.
    pub fn seek_to(&mut self, position: Duration) {
        self.position = position.min(self.duration);
    }

    /// Set the volume (`0..=100`); unmutes.
    pub fn set_volume_percent(&mut self, percent: u8) {
        self.volume_percent = percent.min(100);
        self.muted = false;
    }

    /// Apply a command.
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::TogglePlay => {
                if self.playing {
                    self.pause();
                } else {
                    self.play();
                }
            }
            PlayerCommand::SeekBackward(by) => {
                self.seek_to(self.position.saturating_sub(by));
            }
            PlayerCommand::SeekForward(by) => self.seek_to(self.position + by),
            PlayerCommand::VolumeUp => {
                self.set_volume_percent(self.volume_percent.saturating_add(VOLUME_STEP));
            }
            PlayerCommand::VolumeDown => {
                self.set_volume_percent(self.volume_percent.saturating_sub(VOLUME_STEP));
            }
            PlayerCommand::ToggleMute => self.muted = !self.muted,
            PlayerCommand::ToggleFullscreen => self.fullscreen = !self.fullscreen,
            PlayerCommand::JumpToTenth(tenth) => {
                self.seek_to(self.duration * u32::from(tenth.min(9)) / 10);
            }
        }
    }

    /// Handle a key. Returns true when it was a player shortcut.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match PlayerCommand::from_key(key) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    /// Advance playback to clock time `now`. Reaching the end stops playback.
    pub fn tick(&mut self, now: Duration) {
        if !self.playing {
            return;
        }
        if let Some(last) = self.last_tick {
            self.position = (self.position + now.saturating_sub(last)).min(self.duration);
            if self.position >= self.duration {
                self.playing = false;
                self.last_tick = None;
                return;
            }
        }
        self.last_tick = Some(now);
    }
}

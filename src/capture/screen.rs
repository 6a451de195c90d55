use crate::render::Frame;

/// A key press observed between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Start a countdown and snapshot.
    pub fn is_capture(&self) -> bool {
        matches!(self, Self::Space)
    }
    /// Leave the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Escape | Self::Char('q'))
    }
}

/// Where composited frames go, and where key presses come from.
pub trait Screen {
    fn show(&mut self, frame: &Frame) -> anyhow::Result<()>;
    /// Non-blocking; at most one key per call.
    fn poll_key(&mut self) -> Option<Key>;
    /// Tear down any window or terminal state. Idempotent.
    fn close(&mut self);
}

#[cfg(feature = "cli")]
pub use terminal::TerminalDisplay;

#[cfg(feature = "cli")]
mod terminal {
    use super::*;
    use anyhow::Context;
    use crossterm::event::Event;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyModifiers;
    use std::path::Path;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Writes the latest frame to an image file (any auto-reloading viewer
    /// can watch it) and reads keys from the controlling terminal in raw
    /// mode. Optionally records every frame into a directory.
    pub struct TerminalDisplay {
        output: PathBuf,
        staging: PathBuf,
        record: Option<PathBuf>,
        shown: u64,
        raw: bool,
    }

    impl TerminalDisplay {
        pub fn open(output: &Path, record: Option<&Path>) -> anyhow::Result<Self> {
            if let Some(dir) = record {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("create recording directory {}", dir.display()))?;
            }
            crossterm::terminal::enable_raw_mode().context("enable raw mode")?;
            Ok(Self {
                output: output.to_path_buf(),
                staging: output.with_extension("staging.png"),
                record: record.map(Path::to_path_buf),
                shown: 0,
                raw: true,
            })
        }
    }

    impl Screen for TerminalDisplay {
        fn show(&mut self, frame: &Frame) -> anyhow::Result<()> {
            // stage then rename so viewers never see a half-written file
            frame
                .save(&self.staging)
                .with_context(|| format!("write frame {}", self.staging.display()))?;
            std::fs::rename(&self.staging, &self.output)
                .with_context(|| format!("publish frame {}", self.output.display()))?;
            if let Some(dir) = self.record.as_ref() {
                let path = dir.join(format!("{:06}.png", self.shown));
                frame
                    .save(&path)
                    .with_context(|| format!("record frame {}", path.display()))?;
            }
            self.shown += 1;
            Ok(())
        }
        fn poll_key(&mut self) -> Option<Key> {
            match crossterm::event::poll(Duration::ZERO) {
                Ok(true) => match crossterm::event::read() {
                    Ok(Event::Key(event)) => translate(event),
                    Ok(_) => None,
                    Err(e) => {
                        log::warn!("terminal read failed: {}", e);
                        None
                    }
                },
                Ok(false) => None,
                Err(e) => {
                    log::warn!("terminal poll failed: {}", e);
                    None
                }
            }
        }
        fn close(&mut self) {
            if self.raw {
                self.raw = false;
                if let Err(e) = crossterm::terminal::disable_raw_mode() {
                    log::warn!("could not restore terminal: {}", e);
                }
                log::debug!("display closed after {} frames", self.shown);
            }
        }
    }

    impl Drop for TerminalDisplay {
        fn drop(&mut self) {
            self.close();
        }
    }

    /// Raw mode swallows Ctrl+C, so it doubles as an exit key.
    fn translate(event: KeyEvent) -> Option<Key> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Key::Escape),
            (KeyCode::Char(' '), _) => Some(Key::Space),
            (KeyCode::Esc, _) => Some(Key::Escape),
            (KeyCode::Char(c), _) => Some(Key::Char(c)),
            _ => Some(Key::Other),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
            KeyEvent::new(code, modifiers)
        }

        #[test]
        fn translates_controls() {
            assert!(translate(press(KeyCode::Char(' '), KeyModifiers::NONE)) == Some(Key::Space));
            assert!(translate(press(KeyCode::Esc, KeyModifiers::NONE)) == Some(Key::Escape));
            assert!(translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)) == Some(Key::Escape));
            assert!(translate(press(KeyCode::Char('x'), KeyModifiers::NONE)) == Some(Key::Char('x')));
            assert!(translate(press(KeyCode::Tab, KeyModifiers::NONE)) == Some(Key::Other));
        }

        #[test]
        fn ignores_releases() {
            let mut event = press(KeyCode::Char(' '), KeyModifiers::NONE);
            event.kind = KeyEventKind::Release;
            assert!(translate(event).is_none());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roles() {
        assert!(Key::Space.is_capture());
        assert!(!Key::Space.is_exit());
        assert!(Key::Escape.is_exit());
        assert!(Key::Char('q').is_exit());
        assert!(!Key::Char('x').is_exit());
        assert!(!Key::Other.is_capture());
    }
}

use std::str::FromStr;

use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager,
    hotkey::{Code, HotKey, Modifiers},
};
use snapsheet_core::error::Error;

/// Process-wide hotkey registration. Unregisters on drop.
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeyManager {
    /// Register the default combination, Ctrl+Shift+S.
    pub fn new() -> Result<Self, Error> {
        Self::register(HotKey::new(
            Some(Modifiers::CONTROL | Modifiers::SHIFT),
            Code::KeyS,
        ))
    }

    /// Register a combination string, e.g. "ctrl+shift+KeyS" or "F9".
    pub fn with_combo(combo: &str) -> Result<Self, Error> {
        let hotkey = HotKey::from_str(combo)
            .map_err(|e| Error::Hotkey(format!("cannot parse '{combo}': {e}")))?;
        Self::register(hotkey)
    }

    fn register(hotkey: HotKey) -> Result<Self, Error> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| Error::Hotkey(format!("failed to create manager: {e}")))?;

        // Fails when another process already claimed the combination.
        manager
            .register(hotkey)
            .map_err(|e| Error::Hotkey(e.to_string()))?;

        Ok(Self { manager, hotkey })
    }

    /// Check for a press without blocking.
    pub fn poll(&self) -> bool {
        let receiver = GlobalHotKeyEvent::receiver();
        match receiver.try_recv() {
            Ok(event) => event.id == self.hotkey.id(),
            Err(_) => false,
        }
    }

    /// Block until the registered combination is pressed.
    pub fn wait(&self) -> Result<(), Error> {
        let receiver = GlobalHotKeyEvent::receiver();
        loop {
            let event = receiver
                .recv()
                .map_err(|e| Error::Hotkey(format!("event channel closed: {e}")))?;
            if event.id == self.hotkey.id() {
                return Ok(());
            }
        }
    }

    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        // best effort, errors swallowed
        let _ = self.manager.unregister(self.hotkey);
    }
}

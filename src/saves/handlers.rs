//! Secondary recognizers for saves wrapped by emulators and flash carts, and
//! the hook for custom readers.

use log::warn;

use super::sizes::{SIZE_G3BOX, SIZE_G3COLO, SIZE_G3XD, SIZE_G4RAW};
use super::SaveFile;

/// A raw save with the wrapper bytes split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSave {
    pub header: Vec<u8>,
    pub data: Vec<u8>,
    pub footer: Vec<u8>,
}

/// Strips a known wrapper so the payload can go through the cascade again.
pub trait SaveHandler {
    fn name(&self) -> &'static str;

    /// Cheap length gate checked before [`SaveHandler::try_split`].
    fn is_recognized(&self, len: usize) -> bool;

    fn try_split(&self, data: &[u8]) -> Option<SplitSave>;
}

/// Reader for a layout the built-in cascade does not know. Registered
/// readers run before the cascade.
pub trait SaveReader {
    fn is_recognized(&self, len: usize) -> bool;

    fn read(&self, data: &[u8]) -> Option<SaveFile>;
}

/// DeSmuME appends a footer ending in its signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesmumeFooter;

impl DesmumeFooter {
    pub const FOOTER_SIZE: usize = 0x7A;
    pub const SIGNATURE: &'static [u8] = b"|-DESMUME SAVE-|";
}

impl SaveHandler for DesmumeFooter {
    fn name(&self) -> &'static str {
        "DeSmuME"
    }

    fn is_recognized(&self, len: usize) -> bool {
        len == SIZE_G4RAW + Self::FOOTER_SIZE
    }

    fn try_split(&self, data: &[u8]) -> Option<SplitSave> {
        if data.len() < SIZE_G4RAW || !data.ends_with(Self::SIGNATURE) {
            return None;
        }
        let (payload, footer) = data.split_at(SIZE_G4RAW);
        Some(SplitSave {
            header: Vec::new(),
            data: payload.to_vec(),
            footer: footer.to_vec(),
        })
    }
}

/// Action Replay DS dumps start with a fixed header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionReplayHeader;

impl ActionReplayHeader {
    pub const HEADER_SIZE: usize = 0xA4;
    pub const SIGNATURE: &'static [u8] = b"ARDS000000000001";
}

impl SaveHandler for ActionReplayHeader {
    fn name(&self) -> &'static str {
        "Action Replay DS"
    }

    fn is_recognized(&self, len: usize) -> bool {
        len == SIZE_G4RAW + Self::HEADER_SIZE
    }

    fn try_split(&self, data: &[u8]) -> Option<SplitSave> {
        if data.len() < Self::HEADER_SIZE || !data.starts_with(Self::SIGNATURE) {
            return None;
        }
        let (header, payload) = data.split_at(Self::HEADER_SIZE);
        Some(SplitSave {
            header: header.to_vec(),
            data: payload.to_vec(),
            footer: Vec::new(),
        })
    }
}

/// Dolphin exports GameCube saves as GCI files: a 0x40 byte directory entry
/// followed by the memory card blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DolphinGci;

impl DolphinGci {
    pub const HEADER_SIZE: usize = 0x40;
    /// Game code prefixes; the fourth byte is the region.
    pub const GAME_CODES: [&'static [u8; 3]; 3] = [b"GC6", b"GXX", b"GPX"];
}

impl SaveHandler for DolphinGci {
    fn name(&self) -> &'static str {
        "Dolphin GCI"
    }

    fn is_recognized(&self, len: usize) -> bool {
        len.checked_sub(Self::HEADER_SIZE)
            .is_some_and(|payload| matches!(payload, SIZE_G3COLO | SIZE_G3XD | SIZE_G3BOX))
    }

    fn try_split(&self, data: &[u8]) -> Option<SplitSave> {
        let known = Self::GAME_CODES
            .iter()
            .any(|code| data.starts_with(code.as_slice()));
        if !known || data.len() <= Self::HEADER_SIZE {
            return None;
        }
        let (header, payload) = data.split_at(Self::HEADER_SIZE);
        Some(SplitSave {
            header: header.to_vec(),
            data: payload.to_vec(),
            footer: Vec::new(),
        })
    }
}

pub fn default_handlers() -> [&'static dyn SaveHandler; 3] {
    [&DolphinGci, &DesmumeFooter, &ActionReplayHeader]
}

/// Full recognition flow: custom readers, then the cascade, then each
/// wrapper handler followed by a second pass over the unwrapped payload.
pub struct SaveRecognizer {
    readers: Vec<Box<dyn SaveReader>>,
    handlers: Vec<Box<dyn SaveHandler>>,
}

impl Default for SaveRecognizer {
    fn default() -> Self {
        Self {
            readers: Vec::new(),
            handlers: vec![
                Box::new(DolphinGci),
                Box::new(DesmumeFooter),
                Box::new(ActionReplayHeader),
            ],
        }
    }
}

impl SaveRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_reader(&mut self, reader: Box<dyn SaveReader>) {
        self.readers.push(reader);
    }

    pub fn register_handler(&mut self, handler: Box<dyn SaveHandler>) {
        self.handlers.push(handler);
    }

    pub fn recognize(&self, data: &[u8]) -> Option<SaveFile> {
        let len = data.len();
        let custom = self
            .readers
            .iter()
            .filter(|reader| reader.is_recognized(len))
            .find_map(|reader| reader.read(data));
        if custom.is_some() {
            return custom;
        }

        if let Some(save_type) = super::classify(data) {
            return Some(super::create(save_type, data.to_vec()));
        }

        for handler in self.handlers.iter().filter(|h| h.is_recognized(len)) {
            let Some(split) = handler.try_split(data) else {
                continue;
            };
            let Some(save_type) = super::classify(&split.data) else {
                continue;
            };
            warn!("{} wrapper removed; payload is {}", handler.name(), save_type);
            let mut save = super::create(save_type, split.data);
            save.metadata_mut().set_wrapper(split.header, split.footer);
            return Some(save);
        }
        None
    }
}

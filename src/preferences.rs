use crate::brush::Brush;
use crate::color::SandColor;
use crate::config::SandConfig;
use crate::storage::{BRUSH_COLOR_KEY, BRUSH_SIZE_KEY, KeyValueStore, SYMMETRY_KEY};

/// Brush settings that survive a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub brush_color: SandColor,
    pub brush_size: u32,
    pub symmetry: bool,
}

impl Preferences {
    pub fn defaults(config: &SandConfig) -> Self {
        Self {
            brush_color: config.default_color(),
            brush_size: config.default_brush_size,
            symmetry: false,
        }
    }

    /// Reads every key, falling back to the configured default for anything
    /// absent or unparseable.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, config: &SandConfig) -> Self {
        let defaults = Self::defaults(config);

        let brush_color = match store.get(BRUSH_COLOR_KEY) {
            Some(raw) => SandColor::from_hex(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring stored brush color {:?}", raw);
                defaults.brush_color
            }),
            None => defaults.brush_color,
        };

        // A stored 0 counts as unset, same as a missing value.
        let brush_size = store
            .get(BRUSH_SIZE_KEY)
            .and_then(|raw| parse_leading_int(&raw))
            .filter(|&size| size != 0)
            .map(|size| size.min(config.max_brush_size))
            .unwrap_or(defaults.brush_size);

        let symmetry = store.get(SYMMETRY_KEY).as_deref() == Some("true");

        Self {
            brush_color,
            brush_size,
            symmetry,
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        store.set(BRUSH_COLOR_KEY, self.brush_color.to_hex());
        store.set(BRUSH_SIZE_KEY, self.brush_size.to_string());
        store.set(SYMMETRY_KEY, self.symmetry.to_string());
    }

    pub fn brush(&self) -> Brush {
        Brush::new(self.brush_color, self.brush_size)
    }
}

/// Leading decimal digits of `raw`, so `"7px"` reads as 7. Saturates at `u32::MAX`.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits: &str = &trimmed[..trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len())];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here, every character is a digit.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.min(u32::MAX as u64) as u32)
}

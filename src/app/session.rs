/// One of the two allowed non-empty cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Star,
    Circle,
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Marker::Star => "★",
            Marker::Circle => "⬤",
        }
    }

    /// The marker a cell value holds, if it holds one at all.
    pub fn from_cell(value: &str) -> Option<Marker> {
        match value {
            "★" => Some(Marker::Star),
            "⬤" => Some(Marker::Circle),
            _ => None,
        }
    }

    fn other(self) -> Marker {
        match self {
            Marker::Star => Marker::Circle,
            Marker::Circle => Marker::Star,
        }
    }
}

/// Editing discipline applied to clicks: paint or erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Add,
    Delete,
}

impl EditMode {
    fn other(self) -> EditMode {
        match self {
            EditMode::Add => EditMode::Delete,
            EditMode::Delete => EditMode::Add,
        }
    }
}

/// Session-scoped editing state: the active symbol and mode.
///
/// Lives for the process lifetime, is never persisted, and is not reset by
/// loading a new file. Only the explicit toggles mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSession {
    symbol: Marker,
    mode: EditMode,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            symbol: Marker::Circle,
            mode: EditMode::Add,
        }
    }
}

impl EditSession {
    pub fn symbol(&self) -> Marker {
        self.symbol
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn toggle_symbol(&mut self) {
        self.symbol = self.symbol.other();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.other();
    }
}

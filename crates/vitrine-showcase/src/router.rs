#![forbid(unsafe_code)]

//! Static route table: path in, screen identifier out.
//!
//! One flat table, exact matches only. No guards, no redirects, no
//! parameters — navigation logic lives with the caller.

// ---------------------------------------------------------------------------
// ScreenId
// ---------------------------------------------------------------------------

/// Identifies which demo page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Landing page.
    Home,
    /// Canvas mini-game.
    Game,
    /// Client-side image compressor.
    CompressImage,
    /// Microphone spectrum visualizer.
    VoiceVisualizer,
    /// Freehand drawing board.
    Drawing,
    /// 3D model showroom.
    Showroom3d,
    /// External links page.
    Links,
}

impl ScreenId {
    /// All screens in route-table order.
    pub const ALL: &[ScreenId] = &[
        Self::Home,
        Self::Game,
        Self::CompressImage,
        Self::VoiceVisualizer,
        Self::Drawing,
        Self::Showroom3d,
        Self::Links,
    ];

    /// 0-based index in the ALL array.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Next screen (wraps around).
    pub fn next(self) -> Self {
        let i = (self.index() + 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Previous screen (wraps around).
    pub fn prev(self) -> Self {
        let i = (self.index() + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Route path for this screen.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Game => "/game",
            Self::CompressImage => "/compress-image",
            Self::VoiceVisualizer => "/voice-visualizer",
            Self::Drawing => "/drawing",
            Self::Showroom3d => "/3d",
            Self::Links => "/links",
        }
    }

    /// Full title for wide chrome.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Game => "Game",
            Self::CompressImage => "Compress Image",
            Self::VoiceVisualizer => "Voice Visualizer",
            Self::Drawing => "Drawing",
            Self::Showroom3d => "3D",
            Self::Links => "Links",
        }
    }

    /// Short label for compact chrome (max ~8 chars).
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Game => "Game",
            Self::CompressImage => "Img",
            Self::VoiceVisualizer => "Voice",
            Self::Drawing => "Draw",
            Self::Showroom3d => "3D",
            Self::Links => "Links",
        }
    }
}

/// Resolve a path to a screen. Unknown paths resolve to `None`.
pub fn resolve(path: &str) -> Option<ScreenId> {
    ScreenId::ALL.iter().copied().find(|s| s.path() == path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Color palette, exposed to the stylesheet as CSS custom properties.

// --- Brand ---
pub const PRIMARY_BLUE: &str = "#1E3A8A";
pub const SECONDARY_EMERALD: &str = "#10B981";

// --- Backgrounds ---
pub const NEUTRAL_BG: &str = "#F3F4F6";
pub const CARD_BG: &str = "#FFFFFF";

// --- Text ---
pub const TEXT_DARK: &str = "#1F2937";
pub const TEXT_MEDIUM: &str = "#6B7280";
pub const TEXT_LIGHT: &str = "#9CA3AF";

// --- Borders ---
pub const BORDER_LIGHT: &str = "#E5E7EB";

// --- Status ---
pub const STATUS_GREEN: &str = "#10B981";
pub const STATUS_ORANGE: &str = "#F59E0B";
pub const STATUS_RED: &str = "#EF4444";
pub const STATUS_UNKNOWN: &str = "#9CA3AF";

/// `(custom property, value)` pairs in declaration order
pub const CSS_VARIABLES: [(&str, &str); 12] = [
    ("--primary-blue", PRIMARY_BLUE),
    ("--secondary-emerald", SECONDARY_EMERALD),
    ("--neutral-bg", NEUTRAL_BG),
    ("--card-bg", CARD_BG),
    ("--text-dark", TEXT_DARK),
    ("--text-medium", TEXT_MEDIUM),
    ("--text-light", TEXT_LIGHT),
    ("--border-light", BORDER_LIGHT),
    ("--status-green", STATUS_GREEN),
    ("--status-orange", STATUS_ORANGE),
    ("--status-red", STATUS_RED),
    ("--status-unknown", STATUS_UNKNOWN),
];

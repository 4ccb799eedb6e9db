// DOM wiring constants for the gallery frontend.

// Markup hooks
pub const GALLERY_ELEMENT_ID: &str = "floating-gallery";
pub const FIGURE_SELECTOR: &str = "figure";
pub const CAPTION_SELECTOR: &str = "figcaption";

// Cursor affordances
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

//! DOM contract names and default numeric constants.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Element ids ─────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobileMenuToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAVBAR_ID: &str = "navbar";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const HERO_SECTION_ID: &str = "top";
pub const RESUME_TOGGLE_ID: &str = "toggleResume";
pub const RESUME_CONTENT_ID: &str = "resume-content";
pub const POPUP_ID: &str = "pranavPopup";
pub const CONFIG_SCRIPT_ID: &str = "pageConfig";

// ── Selectors ───────────────────────────────────────────────────

pub const POPUP_CLOSE_SELECTOR: &str = ".prank-close";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const SECTION_LINK_SELECTOR: &str = ".nav-menu a[data-section]";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_LINK_SELECTOR: &str = ".project-link";
pub const MENU_BAR_SELECTOR: &str = "span";
pub const ICON_SELECTOR: &str = "svg";

/// Content cards that fade in the first time they scroll into view.
pub const REVEAL_SELECTORS: [&str; 4] = [".project-card", ".experience-item", ".skill-category", ".timeline-item"];

// ── Classes and attributes ──────────────────────────────────────

pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const MENU_OPEN_CLASS: &str = "active";
pub const LINK_ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "fade-in";
pub const BUTTON_VISIBLE_CLASS: &str = "visible";
pub const SECTION_ATTR: &str = "data-section";
pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const ARIA_HIDDEN_ATTR: &str = "aria-hidden";

// ── Scroll geometry (CSS pixels) ────────────────────────────────

/// Gap left above an anchor target for the sticky header.
pub const HEADER_CLEARANCE_PX: f64 = 80.0;

/// Scroll offset past which the navbar carries a shadow.
pub const NAVBAR_SHADOW_AFTER_PX: f64 = 50.0;

pub const NAVBAR_SHADOW: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";

/// Below this offset no navigation link is highlighted.
pub const NEAR_TOP_PX: f64 = 100.0;

/// Added to the scroll offset before locating the current section.
pub const SECTION_LOOKAHEAD_PX: f64 = 150.0;

/// Distance from the document bottom that counts as "scrolled to the end".
pub const BOTTOM_SLACK_PX: f64 = 50.0;

/// Section highlighted once the page cannot scroll further.
pub const FINAL_SECTION_ID: &str = "contact";

/// Minimum visible height for the resume block to count as in view.
pub const RESUME_MIN_VISIBLE_PX: f64 = 120.0;

/// Widest viewport that still gets the mobile popup.
pub const POPUP_MAX_WIDTH_PX: f64 = 768.0;

// ── Timing ──────────────────────────────────────────────────────

pub const SCROLL_DEBOUNCE_MS: u32 = 10;

/// Delay before scrolling the expanded resume into view, leaving time for reflow.
pub const RESUME_REVEAL_DELAY_MS: u32 = 100;

// ── Reveal watcher ──────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Copy ────────────────────────────────────────────────────────

pub const RESUME_EXPAND_LABEL: &str = "View Full Resume";
pub const RESUME_COLLAPSE_LABEL: &str = "Hide Resume";

pub mod cli_consts {
    //! Showcase Timing and Layout Constants
    //!
    //! This module contains all animation timings, geometry and thresholds used by
    //! the showcase, organized by component.

    // =============================================================================
    // UI LOOP CONFIGURATION
    // =============================================================================

    pub mod ui {
        /// Default frame tick of the UI loop (milliseconds)
        pub const DEFAULT_TICK_RATE_MS: u64 = 33;

        /// Lower bound for a user supplied tick rate (milliseconds)
        pub const MIN_TICK_RATE_MS: u64 = 8;

        /// Capacity of the log event channel feeding the UI
        pub const EVENT_QUEUE_SIZE: usize = 100;

        /// The maximum number of events kept for the footer.
        pub const MAX_ACTIVITY_LOGS: usize = 50;

        /// Rows scrolled per mouse wheel notch
        pub const WHEEL_SCROLL_ROWS: u16 = 3;

        /// Logical pixel size of one terminal cell. Pixel-based animation offsets
        /// and pointer coordinates are converted with these.
        pub const CELL_WIDTH_PX: f64 = 8.0;
        pub const CELL_HEIGHT_PX: f64 = 16.0;
    }

    // =============================================================================
    // LOADER CONFIGURATION
    // =============================================================================

    pub mod loader {
        /// How long the loading gate holds the splash screen (milliseconds)
        pub const GATE_DURATION_MS: u64 = 6000;

        /// Interval between spelled-out words (milliseconds)
        pub const WORD_CYCLE_MS: u64 = 800;

        /// Time spent in the Spelling stage (milliseconds)
        pub const SPELLING_STAGE_MS: u64 = 5000;

        /// Time spent in the Acronym stage (milliseconds)
        pub const ACRONYM_STAGE_MS: u64 = 4000;

        /// Entrance delay between acronym letters (milliseconds)
        pub const LETTER_STAGGER_MS: u64 = 150;

        /// Length of a single letter bounce (milliseconds)
        pub const BOUNCE_MS: u64 = 800;

        /// Additional bounces after the first one
        pub const BOUNCE_REPEATS: u32 = 3;

        /// Bounce height (px)
        pub const BOUNCE_HEIGHT_PX: f64 = 15.0;

        /// Divider under the acronym (delay, grow time, final width in px)
        pub const DIVIDER_DELAY_MS: u64 = 1500;
        pub const DIVIDER_GROW_MS: u64 = 800;
        pub const DIVIDER_WIDTH_PX: f64 = 64.0;

        /// Tagline stage entrance (fade/slide)
        pub const TAGLINE_ENTER_MS: u64 = 600;
        pub const TAGLINE_ENTER_OFFSET_PX: f64 = 20.0;

        /// Acronym letters scaling in during the tagline stage
        pub const TAGLINE_LETTER_STAGGER_MS: u64 = 100;
        pub const TAGLINE_LETTER_MS: u64 = 400;

        /// Per-segment delay of the tagline sentence
        pub const SENTENCE_STAGGER_MS: u64 = 100;
        pub const SENTENCE_FADE_MS: u64 = 300;

        /// Progress bar under the tagline
        pub const PROGRESS_DELAY_MS: u64 = 1200;
        pub const PROGRESS_FILL_MS: u64 = 1000;
    }

    // =============================================================================
    // WAVE CONFIGURATION
    // =============================================================================

    pub mod wave {
        /// Logical canvas size
        pub const CANVAS_WIDTH: u16 = 300;
        pub const CANVAS_HEIGHT: u16 = 80;

        /// Phase advance per frame
        pub const TIME_STEP: f64 = 0.05;

        /// Horizontal frequency of both waves
        pub const FREQUENCY: f64 = 0.02;

        pub const PRIMARY_AMPLITUDE: f64 = 15.0;
        pub const SECONDARY_AMPLITUDE: f64 = 10.0;

        /// Phase offset of the second wave
        pub const SECONDARY_PHASE: f64 = 1.0;
    }

    // =============================================================================
    // TEXT REVEAL CONFIGURATION
    // =============================================================================

    pub mod reveal {
        /// Default delay between tokens (milliseconds)
        pub const DEFAULT_TOKEN_DELAY_MS: u64 = 200;

        /// Default visible fraction that arms the reveal
        pub const DEFAULT_THRESHOLD: f64 = 0.1;

        /// Length of each keyframe segment (milliseconds)
        pub const SEGMENT_MS: u64 = 350;

        /// Keyframes: blur radius (px), opacity and vertical offset (px) for a
        /// token revealed from the top. Bottom reveals flip the offsets.
        pub const HIDDEN_BLUR: f64 = 10.0;
        pub const HIDDEN_OFFSET_PX: f64 = 50.0;
        pub const MIDWAY_BLUR: f64 = 5.0;
        pub const MIDWAY_OPACITY: f64 = 0.5;
        pub const MIDWAY_OFFSET_PX: f64 = 5.0;
    }

    // =============================================================================
    // POINTER TILT CONFIGURATION
    // =============================================================================

    pub mod tilt {
        /// Service card tilt
        pub const CARD_DIVISOR: f64 = 15.0;
        pub const CARD_PERSPECTIVE_PX: f64 = 1000.0;
        pub const CARD_HOVER_SCALE: f64 = 1.05;
        pub const CARD_GLOW_ACTIVE: f64 = 0.4;
        pub const CARD_GLOW_IDLE: f64 = 0.2;
        /// Radius of the glow as a fraction of the card diagonal
        pub const CARD_GLOW_RADIUS: f64 = 0.4;

        /// Call-to-action button tilt
        pub const BUTTON_DIVISOR: f64 = 10.0;
        pub const BUTTON_PERSPECTIVE_PX: f64 = 500.0;
        pub const BUTTON_LIFT_PX: f64 = 10.0;

        /// Detail panel parallax
        pub const PARALLAX_DIVISOR: f64 = 20.0;
    }

    // =============================================================================
    // GALLERY CONFIGURATION
    // =============================================================================

    pub mod gallery {
        /// Visible fraction that starts a card or panel entrance
        pub const ENTRANCE_THRESHOLD: f64 = 0.2;

        /// Card entrance duration and per-index delay (milliseconds)
        pub const CARD_ENTRANCE_MS: u64 = 800;
        pub const CARD_ENTRANCE_STAGGER_MS: u64 = 100;

        /// Detail panel entrance
        pub const PANEL_ENTRANCE_MS: u64 = 1000;
        pub const PANEL_ENTRANCE_OFFSET_PX: f64 = 100.0;

        /// Collapse/expand animation (milliseconds)
        pub const COLLAPSE_MS: u64 = 800;

        /// Rows of a collapsed card
        pub const CARD_HEADER_ROWS: u16 = 3;
    }

    // =============================================================================
    // HERO CONFIGURATION
    // =============================================================================

    pub mod hero {
        pub const PARTICLE_COUNT: usize = 500;
        pub const PARTICLE_SPREAD: f64 = 15.0;
        pub const PARTICLE_SEED: u64 = 0x5375_7266;
        pub const ROTATION_STEP_X: f64 = 0.0001;
        pub const ROTATION_STEP_Y: f64 = 0.0003;
        pub const PARALLAX_FACTOR: f64 = 0.03;
        pub const PARALLAX_DAMPING: f64 = 0.1;
        /// Camera distance from the origin
        pub const CAMERA_Z: f64 = 5.0;

        /// Background fade-in on mount
        pub const BACKDROP_FADE_MS: u64 = 2000;
        pub const BACKDROP_START_SCALE: f64 = 1.2;

        /// Staggered hero content entrance
        pub const CONTENT_DELAY_MS: u64 = 500;
        pub const CONTENT_STAGGER_MS: u64 = 150;
        pub const CONTENT_ENTER_MS: u64 = 1000;
        pub const CONTENT_OFFSET_PX: f64 = 80.0;

        /// Wordmark revealed once the hero has been scrolled past this fraction
        pub const WORDMARK_TRIGGER: f64 = 0.2;
        pub const WORDMARK_REVEAL_MS: u64 = 1200;
        pub const WORDMARK_OFFSET_PX: f64 = 50.0;

        /// Scroll indicator bob
        pub const INDICATOR_DELAY_MS: u64 = 2000;
        pub const INDICATOR_PERIOD_MS: u64 = 1800;
        pub const INDICATOR_TRAVEL_PX: f64 = 15.0;

        /// Per-token delay of both hero reveals (milliseconds)
        pub const REVEAL_TOKEN_DELAY_MS: u64 = 150;
    }
}

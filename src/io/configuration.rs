//! Sketch constants and runtime configuration defaults

// Grid partitioning
/// Number of grid segments along each image axis
pub const NUM_SEGMENTS: u32 = 64;

// Color animation
/// Multiplier applied to normalized block coordinates before sampling noise
pub const NOISE_SCALE: f64 = 3.0;
/// Weight pulling a block's target color toward its noise color
pub const TARGET_BLEND: f64 = 0.6;
/// Noise input offset decorrelating the green channel
pub const GREEN_NOISE_OFFSET: f64 = 50.0;
/// Noise input offset decorrelating the blue channel
pub const BLUE_NOISE_OFFSET: f64 = 100.0;
/// Noise time advance per animated frame
pub const NOISE_TIME_STEP: f64 = 0.01;

// Trails
/// Number of trail particles alive while animation runs
pub const NUM_TRAIL_POINTS: usize = 500;
/// Stroke width of trail segments in pixels
pub const TRAIL_STROKE_WEIGHT: f64 = 30.0;
/// Alpha of trail strokes
pub const TRAIL_STROKE_ALPHA: u8 = 200;
/// Range the horizontal trail seed is drawn from
pub const TRAIL_SEED_X_RANGE: (f64, f64) = (0.0, 1000.0);
/// Range the vertical trail seed is drawn from
pub const TRAIL_SEED_Y_RANGE: (f64, f64) = (1000.0, 2000.0);

/// Gray level the canvas is cleared to every frame
pub const BACKGROUND_GRAY: u8 = 255;

// Noise field shape
/// Octaves summed by the production noise field
pub const NOISE_OCTAVES: usize = 4;
/// Amplitude falloff between octaves
pub const NOISE_PERSISTENCE: f64 = 0.5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible trail seeding
pub const DEFAULT_SEED: u64 = 42;
/// Seed of the production noise field
pub const DEFAULT_NOISE_SEED: u32 = 0;
/// Default number of frames rendered per image
pub const DEFAULT_FRAMES: usize = 120;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 10;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the final GIF frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;

/// Values that shape one sketch, defaulting to the constants above
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Grid segments per axis
    pub num_segments: u32,
    /// Trail particles created on each enable
    pub trail_points: usize,
    /// Seed for the trail random source
    pub seed: u64,
    /// Noise time advance per animated frame
    pub noise_time_step: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            num_segments: NUM_SEGMENTS,
            trail_points: NUM_TRAIL_POINTS,
            seed: DEFAULT_SEED,
            noise_time_step: NOISE_TIME_STEP,
        }
    }
}

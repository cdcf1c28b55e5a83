//! Constants and calibration defaults for the scan pipeline

/// Full-scale reading of the 12-bit ADC domain
pub const ADC_MAX: u16 = 4095;

/// Number of narrow/wide positions per Code 39 character (5 bars + 4 spaces)
pub const PATTERN_LEN: usize = 9;

/// Buffer slots consumed per character: 9 elements plus one inter-character gap
pub const ELEMENTS_PER_CHARACTER: usize = PATTERN_LEN + 1;

/// The `*` start/stop sentinel bounding every Code 39 barcode
pub const SENTINEL: char = '*';

/// Character substituted for a group whose best match exceeds the tolerance
pub const SUBSTITUTE_CHAR: char = '?';

/// Default sample window capacity (samples captured per scan)
pub const DEFAULT_SAMPLE_WINDOW_SIZE: usize = 500;

/// Default run/element buffer capacity (9 characters of 10 slots each)
pub const DEFAULT_MAX_ELEMENTS: usize = 90;

/// Default narrow-to-wide classification cutoff
///
/// Real Code 39 tolerates wide:narrow ratios of 2 to 3; a single cutoff at 3
/// is a deliberate simplification carried over from the sensor calibration.
pub const DEFAULT_WIDE_RATIO: u32 = 3;

/// Default fraction of the window maximum used as the HIGH threshold
pub const DEFAULT_HIGH_THRESHOLD_FRACTION: f32 = 0.72;

/// Default multiple of the window minimum used as the LOW threshold
pub const DEFAULT_LOW_THRESHOLD_FRACTION: f32 = 1.2;

/// Default debounce interval for event-driven segmentation, in sample ticks
pub const DEFAULT_DEBOUNCE_INTERVAL: u32 = 500;

/// Default Hamming distance tolerated when matching a 9-element group
///
/// 0 reduces the decoder to exact-match only.
pub const DEFAULT_MAX_HAMMING_DISTANCE: u32 = 2;

/// Digital presence cutoff used when deriving a digital level from ADC replay
pub const DIGITAL_PRESENCE_THRESHOLD: u16 = 1000;

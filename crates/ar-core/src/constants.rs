use glam::Vec3;

// Shared interaction/layout tuning constants used by the core and the web frontend.

// Gesture classification
pub const TAP_MAX_DURATION_MS: f64 = 200.0; // press shorter than this can be a tap
pub const TAP_MOVE_THRESHOLD: f32 = 10.0; // per-axis slop before a press stops being a tap

// Rotation
pub const ROTATION_RADIANS_PER_UNIT: f32 = 0.01; // yaw change per horizontal pixel

// Callout oscillation
pub const CALLOUT_AMPLITUDE: f32 = 0.05;
pub const CALLOUT_SPEED: f64 = 0.003; // radians per wall-clock millisecond
pub const CALLOUT_OFFSET: Vec3 = Vec3::new(0.5, -0.7, 1.0); // relative to the anchor group
pub const CALLOUT_SCALE: f32 = 0.5;

// Character model placement (rotation is authored in radians as-is)
pub const MODEL_SCALE: f32 = 12.0;
pub const MODEL_POSITION: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const MODEL_ROTATION: Vec3 = Vec3::new(90.0, 0.0, 0.0);

// Info panel layout
pub const PANEL_POSITION: Vec3 = Vec3::new(0.0, 0.3, 0.0);
pub const PANEL_SCALE: f32 = 0.8;
pub const PANE_SIZE: [f32; 2] = [0.8, 0.6]; // backing plane width/height
pub const PANE_CONTENT_SIZE: [f32; 2] = [0.7, 0.5]; // text / slide plane width/height
pub const PANE_OFFSET_X: f32 = 0.8; // left pane at -x, right pane at +x
pub const PANE_CONTENT_Z: f32 = 0.01; // content floats just in front of its backing
pub const PANE_OPACITY: f32 = 0.9;

// Text texture canvas
pub const PANEL_TEXT_CANVAS: [u32; 2] = [512, 256];

// Tracker smoothing
pub const TRACKER_FILTER_MIN_CF: f64 = 0.0001;
pub const TRACKER_FILTER_BETA: f64 = 0.001;

// Default assets
pub const DEFAULT_TARGET_SRC: &str = "targets.mind";
pub const DEFAULT_MODEL_URL: &str = "pup.glb";
pub const DEFAULT_CALLOUT_TEXTURE_URL: &str = "callout (2).png";
pub const DEFAULT_SLIDE_URLS: [&str; 3] = [
    "https://images.pexels.com/photos/1108099/pexels-photo-1108099.jpeg",
    "https://images.pexels.com/photos/1805164/pexels-photo-1805164.jpeg",
    "https://images.pexels.com/photos/39317/chihuahua-dog-puppy-cute-39317.jpeg",
];

pub const DEFAULT_PANEL_TITLE: &str = "Adorable AR Puppy";
pub const DEFAULT_PANEL_LINES: [&str; 4] = [
    "Perfect virtual companion",
    "for all ages!",
    "Tap to interact with your",
    "new AR friend",
];

/// Default values and fixed style tables for the tilt effect.
///
/// These constants express the out-of-the-box behavior of a tilted element
/// and keep magic numbers and CSS strings out of the state machine.
// Tilt
pub const DEFAULT_MAX_DEG: f64 = 10.0;
pub const DEFAULT_PERSPECTIVE_PX: f64 = 1000.0;
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_SPEED_MS: u32 = 300;
pub const DEFAULT_EASING: &str = "cubic-bezier(.03,.98,.52,.99)";

// Glare
pub const DEFAULT_MAX_GLARE: f64 = 1.0;
pub const GLARE_SIZE_FACTOR: f64 = 2.0; // glare square edge relative to the element's longest side
pub const GLARE_RESET_TRANSFORM: &str = "rotate(180deg) translate(-50%, -50%)";

// Gyroscope
pub const DEFAULT_GYRO_MIN_ANGLE: f64 = -45.0;
pub const DEFAULT_GYRO_MAX_ANGLE: f64 = 45.0;
pub const DEFAULT_GYRO_SAMPLES: u32 = 10; // orientation events folded into the zero reference

// Decimal places kept for tilt angles
pub const TILT_DECIMALS: i32 = 2;

pub const GLARE_WRAPPER_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("overflow", "hidden"),
    ("pointer-events", "none"),
    ("border-radius", "inherit"),
];

pub const GLARE_INNER_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "50%"),
    ("left", "50%"),
    ("pointer-events", "none"),
    (
        "background-image",
        "linear-gradient(0deg, rgba(255,255,255,0) 0%, rgba(255,255,255,1) 100%)",
    ),
    ("transform", GLARE_RESET_TRANSFORM),
    ("transform-origin", "0% 0%"),
    ("opacity", "0"),
];

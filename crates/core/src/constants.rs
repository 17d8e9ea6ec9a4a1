/// Preference store key holding the serialized to-do list
pub const TODOS_STORE_KEY: &str = "todos";

/// Total percentage budget shared by all incomplete items
pub const PERCENT_BUDGET: f64 = 100.0;

/// Tolerance when comparing percent sums
pub const PERCENT_EPSILON: f64 = 0.01;

/// Chart slices start at the top of the circle
pub const CHART_START_ANGLE_DEG: f64 = -90.0;

/// Slice labels sit at this fraction of the chart radius
pub const LABEL_RADIUS_RATIO: f64 = 0.8;

/// Slices thinner than this percentage get no label
pub const LABEL_MIN_PERCENT: f64 = 3.0;

/// Inner hole fraction for the donut rendering
pub const DONUT_HOLE_RATIO: f64 = 0.6;

/// Preference store key for the UI theme
pub const THEME_SETTING_KEY: &str = "theme";

/// Default UI theme
pub const DEFAULT_THEME: &str = "light";

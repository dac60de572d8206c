pub const G0: f64 = 9.81; // Acceleration due to gravity (m/s²)

// Default flight profile
pub const CLIMB_RATE: f64 = 10.0; // Altitude gained per climb step (m)
pub const CLIMB_END_TIME: u32 = 20; // Climb ends at this elapsed time (s)
pub const TURN_END_TIME: u32 = 40; // Turn ends at this elapsed time (s)

// Default initial conditions
pub const INITIAL_VELOCITY: f64 = 300.0; // m/s
pub const INITIAL_ALTITUDE: f64 = 2000.0; // m
pub const TIME_STEP: f64 = 1.0; // s
pub const TOTAL_STEPS: u32 = 60;

// Speed sweep
pub const SWEEP_MIN_SPEED: f64 = 100.0; // m/s
pub const SWEEP_MAX_SPEED: f64 = 900.0; // m/s
pub const SWEEP_SAMPLES: usize = 800;

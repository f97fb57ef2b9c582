pub const SECTOR_SIZE: i32 = 8;

pub const INITIAL_ENERGY: i32 = 3000;
pub const INITIAL_SHIELDS: i32 = 1000;
pub const INITIAL_TORPEDOES: i32 = 10;
pub const INITIAL_SECTOR: (i32, i32) = (4, 4);
pub const SHIP_NAME: &str = "USS Enterprise";

pub const STARTING_STARDATE: i32 = 1312;
pub const MISSION_TURNS: i32 = 30;

pub const KLINGON_COUNT: usize = 3;
/// Klingon hull is drawn from `[min, max)`.
pub const KLINGON_HULL_RANGE: (i32, i32) = (300, 550);

pub const TORPEDO_BASE_RANGE: (i32, i32) = (360, 620);
pub const KLINGON_FIRE_RANGE: (i32, i32) = (120, 340);

pub const MIN_NAV_COST: i32 = 25;
pub const NAV_COST_PER_SECTOR: f64 = 80.0;

/// Verbs that spend a turn and trigger Klingon return fire when they execute.
pub const TURN_CONSUMING_VERBS: [&str; 3] = ["PHA", "NAV", "TOR"];

/// Ship-wide alert state. Destroyed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    Normal,
    RedAlert,
    Destroyed,
}

impl AlertLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "Normal",
            AlertLevel::RedAlert => "RedAlert",
            AlertLevel::Destroyed => "Destroyed",
        }
    }

    /// Scale applied to incoming fire before shields absorb it.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            AlertLevel::Normal => 1.0,
            AlertLevel::RedAlert => 0.9,
            AlertLevel::Destroyed => 1.0,
        }
    }
}

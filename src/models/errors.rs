use thiserror::Error;

/// Integration-level failures: terminal I/O and bad launch configuration.
/// The engine itself never produces these.
#[derive(Debug, Error)]
pub enum GameError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Launch configuration rejected before a game could start
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// A command rejected during validation.
///
/// The display text is what the player sees in the computer log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0} coordinates must be whole numbers.")]
    CoordinatesNotWhole(&'static str),

    #[error("{0} coordinates must be between 1 and 8.")]
    CoordinatesOutOfRange(&'static str),

    #[error("Already at those coordinates.")]
    AlreadyThere,

    #[error("Navigation blocked: hostile vessel occupies that sector.")]
    SectorOccupied,

    #[error("Insufficient energy for course. Required: {required}, available: {available}")]
    InsufficientCourseEnergy { required: i32, available: i32 },

    #[error("No targets in range. Quadrant secure.")]
    NoTargets,

    #[error("Phaser energy must be a whole number.")]
    PhaserEnergyNotWhole,

    #[error("Phaser energy must be greater than zero.")]
    PhaserEnergyNotPositive,

    #[error("Insufficient energy. Available: {available}")]
    InsufficientEnergy { available: i32 },

    #[error("No photon torpedoes remaining.")]
    TorpedoesExpended,

    #[error("Unknown command. Type HELP for available commands.")]
    UnknownCommand,
}

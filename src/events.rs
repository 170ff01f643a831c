use bevy_ecs::entity::Entity;
use bevy_ecs::event::Event;

/// Horizontal steering directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalDir {
    Left,
    Right,
}

impl HorizontalDir {
    /// Sign of the direction along the x axis.
    pub fn sign(self) -> f32 {
        match self {
            HorizontalDir::Left => -1.0,
            HorizontalDir::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    Move(HorizontalDir),
    Fire,
    /// Any input-device activation; only meaningful on the game-over screen.
    Acknowledge,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// A projectile destroyed a hostile this tick.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostileDown {
    pub projectile: Entity,
    pub hostile: Entity,
}

/// A hostile reached the player this tick.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStruck {
    pub hostile: Entity,
}

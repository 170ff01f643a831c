use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use bitflags::bitflags;
use sdl2::{event::Event, keyboard::Keycode, EventPump};

use crate::events::{GameCommand, GameEvent, HorizontalDir};
use crate::systems::stage::GameStage;

bitflags! {
    /// Movement keys currently held down.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HeldKeys: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
    }
}

/// Maps a pressed key to the command it triggers, if any.
pub fn command_for_key(key: Keycode) -> Option<GameCommand> {
    match key {
        Keycode::Escape | Keycode::Q => Some(GameCommand::Exit),
        Keycode::Space => Some(GameCommand::Fire),
        _ => None,
    }
}

/// Maps a key to the steering direction it holds, if any.
pub fn direction_for_key(key: Keycode) -> Option<HorizontalDir> {
    match key {
        Keycode::Left | Keycode::A => Some(HorizontalDir::Left),
        Keycode::Right | Keycode::D => Some(HorizontalDir::Right),
        _ => None,
    }
}

fn held_flag(direction: HorizontalDir) -> HeldKeys {
    match direction {
        HorizontalDir::Left => HeldKeys::LEFT,
        HorizontalDir::Right => HeldKeys::RIGHT,
    }
}

/// Polls the SDL event pump and translates raw input into game commands.
///
/// Movement is level-triggered: held keys are tracked across ticks and the
/// active direction is re-issued every tick. Fire is edge-triggered (one
/// command per non-repeat key press). While the game-over screen is up,
/// only `Exit` and `Acknowledge` are issued; everything else is swallowed,
/// so a held fire key cannot leak into the next session.
pub fn input_system(
    mut held: ResMut<HeldKeys>,
    stage: Res<GameStage>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    let playing = matches!(*stage, GameStage::Playing);

    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameCommand::Exit.into());
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(direction) = direction_for_key(key) {
                    held.insert(held_flag(direction));
                }
                match command_for_key(key) {
                    Some(GameCommand::Exit) => {
                        writer.write(GameCommand::Exit.into());
                    }
                    Some(command) if playing => {
                        writer.write(command.into());
                    }
                    _ => {}
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(direction) = direction_for_key(key) {
                    held.remove(held_flag(direction));
                }
                if !playing {
                    writer.write(GameCommand::Acknowledge.into());
                }
            }
            _ => {}
        }
    }

    // Re-issue the held direction each tick; right wins when both are held.
    if playing {
        if held.contains(HeldKeys::RIGHT) {
            writer.write(GameCommand::Move(HorizontalDir::Right).into());
        } else if held.contains(HeldKeys::LEFT) {
            writer.write(GameCommand::Move(HorizontalDir::Left).into());
        }
    }
}

//! Input systems
//!
//! This module maps keyboard and mouse-button state onto the two pieces of
//! input state the frame loop reads: the run-state machine and the spin flag.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::resources::{RunState, SpinState};

/// Stop the loop when Escape is pressed.
///
/// The transition is terminal: once `Stopped`, later keydowns are ignored.
/// Stopping is cooperative, the exit request is written and the in-flight
/// frame still runs to completion. No other key is handled.
pub fn handle_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    mut run_state: ResMut<RunState>,
    mut exit: MessageWriter<AppExit>,
) {
    if *run_state == RunState::Running && keys.just_pressed(KeyCode::Escape) {
        info!("escape pressed, stopping the frame loop");
        *run_state = RunState::Stopped;
        exit.write(AppExit::Success);
    }
}

/// Mirror the mouse-button state into the spin flag.
///
/// Any held button counts, matching the observed behavior. Runs before the
/// animation system so a press or release is observed no later than the next
/// frame's rotation step.
pub fn track_spin(buttons: Res<ButtonInput<MouseButton>>, mut spin: ResMut<SpinState>) {
    spin.fast = buttons.any_pressed([MouseButton::Left, MouseButton::Right, MouseButton::Middle]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.add_message::<AppExit>();
        app.init_resource::<RunState>();
        app.init_resource::<SpinState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app.add_systems(Update, (handle_keyboard, track_spin));
        app
    }

    #[test]
    fn escape_stops_the_loop_and_requests_exit() {
        let mut app = input_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();

        assert_eq!(*app.world().resource::<RunState>(), RunState::Stopped);
        assert!(!app.world().resource::<Messages<AppExit>>().is_empty());
    }

    #[test]
    fn stopped_is_terminal() {
        let mut app = input_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        assert_eq!(*app.world().resource::<RunState>(), RunState::Stopped);

        // A second Escape keydown is a no-op.
        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release(KeyCode::Escape);
            keys.clear();
        }
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        assert_eq!(*app.world().resource::<RunState>(), RunState::Stopped);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = input_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();
        assert_eq!(*app.world().resource::<RunState>(), RunState::Running);
        assert!(app.world().resource::<Messages<AppExit>>().is_empty());
    }

    #[test]
    fn spin_flag_follows_the_mouse_button() {
        let mut app = input_app();
        assert!(!app.world().resource::<SpinState>().fast);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        assert!(app.world().resource::<SpinState>().fast);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        app.update();
        assert!(!app.world().resource::<SpinState>().fast);
    }

    #[test]
    fn any_mouse_button_spins() {
        let mut app = input_app();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Right);
        app.update();
        assert!(app.world().resource::<SpinState>().fast);
    }
}

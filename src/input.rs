//! Keyboard to game action mapping.

use piston_window::{Button, Key};


#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Action { MoveLeft, MoveRight, SoftDrop, Rotate }


/// The action bound to a pressed button, if any.
pub fn action_for(button: Button) -> Option<Action>
{
    match button    // We only care about the four arrows, all others are ignored.
    {
        Button::Keyboard(Key::Left)  => Some(Action::MoveLeft),
        Button::Keyboard(Key::Right) => Some(Action::MoveRight),
        Button::Keyboard(Key::Down)  => Some(Action::SoftDrop),
        Button::Keyboard(Key::Up)    => Some(Action::Rotate),
        _ => None
    }
}

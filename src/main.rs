/*

MIT License

Copyright (c) 2021 Ben Cantrick

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

*/

mod music;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;
use piston_window::*;
use piston_window::graphics::{clear, rectangle, Context, Graphics, Rectangle};

use rustris::render::{Color, Rect, Surface};
use rustris::{action_for, Args, GameEvent, Renderer, Score, Session};

use crate::music::Music;


/// Piston's 2D graphics, seen as a `Surface` for the renderer.
struct PistonSurface<'a, G: Graphics>
{
    context: Context,
    graphics: &'a mut G
}


impl<'a, G: Graphics> Surface for PistonSurface<'a, G>
{
    fn clear(&mut self, color: Color)
    {
        clear(color, &mut *self.graphics);
    }

    fn fill_rect(&mut self, color: Color, rect: Rect)
    {
        rectangle(color, rect, self.context.transform, &mut *self.graphics);
    }

    fn stroke_rect(&mut self, color: Color, rect: Rect)
    {
        // A border of radius 0.5 is a 1 pixel line.
        Rectangle::new_border(color, 0.5).draw(rect, &self.context.draw_state, self.context.transform, &mut *self.graphics);
    }
}


//
// ////////// MAIN //////////
//
fn main() -> Result<()>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.game_config()?;
    info!("{} x {} well, {}ms per drop, seed {:?}", config.cols, config.rows, config.drop_interval_ms, config.seed);

    let mut window: PistonWindow =
        WindowSettings::new(title(&Score::new()), config.window_size())    // Window title, size.
        .exit_on_esc(true)
        .vsync(true)
        .resizable(false)
        .build()
        .map_err(|err| anyhow!("could not open the game window: {}", err))?;

    window.events.set_ups(args.ups);

    // Music is optional. If anything about it fails the game just runs silent.
    let mut music = args.music.as_deref().and_then(|track| match Music::open(track, args.volume) {
        Ok(music) => Some(music),
        Err(err) => {
            log::warn!("music disabled: {:#}", err);
            None
        }
    });

    let renderer = Renderer::new(config.block_size);
    let mut session = Session::new(&config);

    // *****
    // ***** MAIN LOOP
    // *****
    while let Some(event) = window.next()
    {
        match event
        {
            Event::Loop(Loop::Render(_)) => {
                window.draw_2d(&event, |context, graphics, _device| {
                    renderer.draw_frame(&session, &mut PistonSurface { context, graphics });
                });
            }

            // Gravity. Piston reports elapsed seconds, the session wants milliseconds.
            Event::Loop(Loop::Update(update)) =>
            {
                for game_event in session.advance(update.dt * 1000.0)
                {
                    match game_event
                    {
                        GameEvent::ScoreChanged { .. } => show_score(&mut window, session.score()),
                        GameEvent::GameOver { score } => {
                            game_over(&mut window, score);
                            if let Some(music) = music.as_mut() { music.stop(); }
                        }
                        GameEvent::PieceLocked { .. } => ()
                    }
                }

                if !session.is_over() {
                    if let Some(music) = music.as_mut() { music.keep_playing(); }
                }
            }

            // Key presses act right away. Releases are ignored.
            Event::Input(Input::Button(button_args), _time_stamp) =>
            {
                if button_args.state == ButtonState::Press {
                    handle_press(button_args.button, &mut session, &mut window, music.as_mut());
                }
            }

            _ => ()
        }
    }

    Ok(())
}


fn handle_press(button: Button, session: &mut Session, window: &mut PistonWindow, music: Option<&mut Music>)
{
    if let Some(action) = action_for(button) {
        session.apply(action);
        return;
    }

    match button
    {
        Button::Keyboard(Key::M) => {
            if let Some(music) = music { music.toggle(); }
        }
        Button::Keyboard(Key::Return) if session.is_over() => {
            info!("starting a new game");
            session.restart();
            show_score(window, session.score());
        }
        _ => ()
    }
}


fn title(score: &Score) -> String
{
    format!("Rustris - {}", score.label())
}


fn show_score(window: &mut PistonWindow, score: &Score)
{
    window.set_title(title(score));
}


fn game_over(window: &mut PistonWindow, score: u32)
{
    info!("game over, final score {}", score);
    println!("Game over! Final score: {}", score);
    window.set_title(format!("Rustris - Game Over - Score: {} (Enter to play again)", score));
}

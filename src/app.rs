use std::io;
use std::thread;
use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::audio::{AudioSink, SoundBank};
use crate::config::GameConfig;
use crate::input::{Input, InputSource};
use crate::render::MenuScreen;
use crate::session::{Cue, Session, SessionOutcome, SessionState};

/// Everything acquired at startup and shared by the menu and the game loop.
pub struct Context<B: Backend, I: InputSource, A: AudioSink> {
    pub terminal: Terminal<B>,
    pub input: I,
    pub audio: A,
    pub sounds: SoundBank,
    pub config: GameConfig,
    rng: StdRng,
}

impl<B: Backend, I: InputSource, A: AudioSink> Context<B, I, A> {
    pub fn new(terminal: Terminal<B>, input: I, audio: A, config: GameConfig, mut rng: StdRng) -> Self {
        let sounds = SoundBank::new(&config.audio, &mut rng);
        Context {
            terminal,
            input,
            audio,
            sounds,
            config,
            rng,
        }
    }

    /// Sleeps out whatever is left of the current frame.
    fn pace(&self, frame_start: Instant) {
        if let Some(rest) = self.config.frame_interval().checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    fn play_cue(&mut self, cue: Cue) {
        let sound = match cue {
            Cue::Eat => &self.sounds.eat,
            Cue::Crash => &self.sounds.crash,
        };
        self.audio.play(sound);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
    Exited,
}

/// Runs the title menu until the player exits.
pub fn run<B: Backend, I: InputSource, A: AudioSink>(ctx: &mut Context<B, I, A>) -> io::Result<()> {
    let mut screen = Screen::Menu;
    loop {
        screen = match screen {
            Screen::Menu => menu_frame(ctx)?,
            Screen::Playing => match play(ctx)? {
                SessionOutcome::Ended => Screen::Menu,
                SessionOutcome::Quit => Screen::Exited,
            },
            Screen::Exited => {
                info!("Exiting");
                return Ok(());
            }
        };
    }
}

fn menu_frame<B: Backend, I: InputSource, A: AudioSink>(
    ctx: &mut Context<B, I, A>,
) -> io::Result<Screen> {
    let frame_start = Instant::now();
    ctx.terminal.draw(|f| f.render_widget(MenuScreen, f.area()))?;

    for input in ctx.input.drain()? {
        match input {
            Input::Confirm => return Ok(Screen::Playing),
            Input::Cancel | Input::Quit => return Ok(Screen::Exited),
            Input::Steer(_) => {}
        }
    }

    ctx.pace(frame_start);
    Ok(Screen::Menu)
}

/// Plays one session to its end, or until the player quits.
pub fn play<B: Backend, I: InputSource, A: AudioSink>(
    ctx: &mut Context<B, I, A>,
) -> io::Result<SessionOutcome> {
    let mut session = Session::new(&ctx.config, StdRng::seed_from_u64(ctx.rng.gen()));
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        for input in ctx.input.drain()? {
            match input {
                Input::Quit => {
                    info!("Quit during play");
                    return Ok(SessionOutcome::Quit);
                }
                Input::Steer(direction) => session.steer(direction),
                Input::Confirm | Input::Cancel => {}
            }
        }

        for cue in session.update(frame_start - last_frame) {
            ctx.play_cue(cue);
        }
        last_frame = frame_start;

        ctx.terminal.draw(|f| f.render_widget(&session, f.area()))?;

        if session.state() == SessionState::Ended {
            return Ok(SessionOutcome::Ended);
        }
        ctx.pace(frame_start);
    }
}

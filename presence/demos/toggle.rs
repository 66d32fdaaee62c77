use std::fs::File;
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use presence::{AnimationStyles, Phase, TransitionController};
use simplelog::{Config, LevelFilter, WriteLogger};

const BAR_WIDTH: f32 = 40.0;
const FRAME: Duration = Duration::from_millis(16);

/// What the controller hands back each frame.
struct Panel {
    phase: Phase,
    styles: AnimationStyles,
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("toggle.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut panel = TransitionController::builder()
        .render(|phase, styles: &AnimationStyles| Panel {
            phase,
            styles: *styles,
        })
        .on_open_complete(|| log::info!("panel opened"))
        .on_close_complete(|| log::info!("panel closed"))
        .build()
        .expect("render callback is set");

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;

    let result = run(&mut out, &mut panel);

    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut Stdout, panel: &mut TransitionController<Panel>) -> std::io::Result<()> {
    let mut open = false;

    loop {
        let now = Instant::now();
        panel.tick(now);
        draw(out, panel, open, now)?;

        // Sleep until the next frame while animating, otherwise until input
        let timeout = if panel.is_animating() {
            FRAME
        } else {
            Duration::from_secs(1)
        };
        if !event::poll(timeout)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(' ') => {
                    open = !open;
                    panel.update(open, Instant::now());
                }
                _ => {}
            }
        }
    }
}

fn draw(
    out: &mut Stdout,
    panel: &TransitionController<Panel>,
    open: bool,
    now: Instant,
) -> std::io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("space = toggle, q = quit"),
        MoveTo(0, 2),
        Print(format!(
            "open={} active={} exiting={}",
            open,
            panel.active(),
            panel.is_exiting()
        )),
    )?;

    match panel.render() {
        Some(frame) => {
            let style = frame.styles.resolve(frame.phase, panel.progress(now));
            let width = (BAR_WIDTH * style.scale * style.opacity).round() as usize;
            queue!(
                out,
                MoveTo(0, 4),
                Print(format!("{:<9} {}", frame.phase, "#".repeat(width))),
                MoveTo(0, 5),
                Print(format!(
                    "opacity={:.2} scale={:.2}",
                    style.opacity, style.scale
                )),
            )?;
        }
        None => {
            queue!(out, MoveTo(0, 4), Print("(unmounted)"))?;
        }
    }

    out.flush()
}

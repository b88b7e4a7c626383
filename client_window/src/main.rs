//! Windowed front end: opens the canvas, binds the keys, and drives the
//! fixed-tick simulation.

mod hud;
mod input;

use std::path::PathBuf;

use anyhow::{anyhow, Context as _, Result};
use game_core::{Config, Game, Side};
use piston_window::*;

const BG_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Left `#ff8800`, right `#0088ff`
const PAD_COLORS: [[f32; 4]; 2] = [
    [1.0, 0.533, 0.0, 1.0],
    [0.0, 0.533, 1.0, 1.0],
];
const BALL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Pick the first TTF that exists on this machine; the HUD has no bundled
/// font asset.
fn find_font() -> Result<PathBuf> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
        .ok_or_else(|| anyhow!("no usable TTF font found, tried: {}", CANDIDATES.join(", ")))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut game = Game::new(Config::new());
    let width = game.config().frame_width as u32;
    let height = game.config().frame_height as u32;

    let mut window: PistonWindow = WindowSettings::new("PING PONG", [width, height])
        .exit_on_esc(true)
        .resizable(false)
        .build()
        .map_err(|e| anyhow!("failed to open window: {}", e))?;

    let font = find_font()?;
    let mut glyphs = window
        .load_font(&font)
        .with_context(|| format!("failed to load font {}", font.display()))?;
    log::info!("using font {}", font.display());

    while let Some(e) = window.next() {
        if let Some(Button::Keyboard(key)) = e.press_args() {
            match input::map_key(key) {
                Some(input::Command::Move(side, offset)) => {
                    game.move_paddle(side, offset);
                }
                Some(input::Command::Start) => {
                    game.start();
                }
                None => {}
            }
        }

        if let Some(args) = e.update_args() {
            game.update(args.dt as f32);
        }

        window.draw_2d(&e, |c, g, device| {
            clear(BG_COLOR, g);
            draw_scene(&game, &mut glyphs, &c, g);
            glyphs.factory.encoder.flush(device);
        });
    }

    Ok(())
}

fn draw_scene(game: &Game, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) {
    let config = game.config();
    let w = config.frame_width as f64;
    let h = config.frame_height as f64;

    // centre line
    line(hud::HUD_COLOR, 0.5, [w * 0.5, 0.0, w * 0.5, h], c.transform, g);

    hud::draw(game, glyphs, c, g);

    for side in [Side::Left, Side::Right] {
        let bounds = game.paddle_bounds(side);
        rectangle(
            PAD_COLORS[side.index()],
            [
                bounds.min.x as f64,
                bounds.min.y as f64,
                bounds.width() as f64,
                bounds.height() as f64,
            ],
            c.transform,
            g,
        );
    }

    if let Some(bounds) = game.ball_bounds() {
        ellipse(
            BALL_COLOR,
            [
                bounds.min.x as f64,
                bounds.min.y as f64,
                bounds.width() as f64,
                bounds.height() as f64,
            ],
            c.transform,
            g,
        );
    }
}

//! HUD text: scores, key hints, and the winner banner

use game_core::{Game, MatchPhase};
use piston_window::character::CharacterCache;
use piston_window::{text, Context, G2d, Glyphs, Transformed};

pub const HUD_COLOR: [f32; 4] = [0.267, 0.267, 0.267, 1.0];
pub const SCORE_SIZE: u32 = 100;
pub const HUD_SIZE: u32 = 30;

/// Draw a string centred on (x, y), like a canvas text item.
///
/// Piston anchors text at the baseline start, so the transform backs up by
/// half the rendered width and drops below the midline.
fn draw_centered(
    s: &str,
    size: u32,
    x: f64,
    y: f64,
    glyphs: &mut Glyphs,
    c: &Context,
    g: &mut G2d,
) {
    let width = glyphs.width(size, s).unwrap_or(0.0);
    let transform = c
        .transform
        .trans(x - width * 0.5, y + f64::from(size) * 0.35);
    if let Err(e) = text::Text::new_color(HUD_COLOR, size).draw(s, glyphs, &c.draw_state, transform, g)
    {
        log::warn!("text draw failed: {:?}", e);
    }
}

/// Draw all HUD text for the current phase
pub fn draw(game: &Game, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) {
    let config = game.config();
    let w = config.frame_width as f64;
    let h = config.frame_height as f64;
    let score = game.score();

    draw_centered(&score.left.to_string(), SCORE_SIZE, w * 0.25, h * 0.5, glyphs, c, g);
    draw_centered(&score.right.to_string(), SCORE_SIZE, w * 0.75, h * 0.5, glyphs, c, g);

    match game.phase() {
        MatchPhase::AwaitingStart => {
            draw_centered("W", HUD_SIZE, w / 6.0, h / 6.0, glyphs, c, g);
            draw_centered("S", HUD_SIZE, w / 6.0, h * 5.0 / 6.0, glyphs, c, g);
            draw_centered("\u{2191}", HUD_SIZE, w * 5.0 / 6.0, h / 6.0, glyphs, c, g);
            draw_centered("\u{2193}", HUD_SIZE, w * 5.0 / 6.0, h * 5.0 / 6.0, glyphs, c, g);
            draw_centered("START  [space]", HUD_SIZE, w * 0.5, h * 0.75, glyphs, c, g);
        }
        MatchPhase::MatchOver => {
            if let Some(winner) = game.winner() {
                let banner = format!("{} player wins!!!", winner.label());
                draw_centered(&banner, HUD_SIZE, w * 0.5, h * 0.25, glyphs, c, g);
            }
        }
        MatchPhase::Rallying | MatchPhase::RoundEndPause => {}
    }
}

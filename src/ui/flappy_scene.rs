//! UI rendering for the Flappy Bird playfield.

use crate::ui::game_common::{
    create_game_layout, render_game_over_popup, render_info_panel_frame, render_status_bar,
};
use flappy::game::{Game, Rect as WorldRect, RunStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: [(&str, &str); 2] = [("[Space/Click]", "Flap"), ("[Q/Esc]", "Quit")];

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &Game) {
    let border = if game.is_alive() {
        Color::Cyan
    } else {
        Color::Red
    };
    let layout = create_game_layout(frame, area, " Flappy ", border, 20);

    let field = fit_aspect(
        layout.content,
        game.config.field_width,
        game.config.field_height,
    );
    render_play_area(frame, field, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.status == RunStatus::Over {
        render_crash_popup(frame, field, game);
    }
}

/// Largest centred sub-area of `area` showing a `width` x `height` world
/// without distortion. Terminal cells are roughly twice as tall as wide.
pub fn fit_aspect(area: Rect, width: f64, height: f64) -> Rect {
    if area.width == 0 || area.height == 0 || width <= 0.0 || height <= 0.0 {
        return area;
    }
    let cells_per_row = width / height * 2.0;
    let mut w = (area.height as f64 * cells_per_row).round() as u16;
    let mut h = area.height;
    if w > area.width {
        w = area.width;
        h = ((area.width as f64 / cells_per_row).round() as u16).clamp(1, area.height);
    }
    let w = w.max(1);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Clip a world rectangle to the visible field. Canvas shapes that reach
/// outside the bounds are dropped whole, so partially visible obstacles
/// must be cut down first.
pub fn clip_to_field(rect: WorldRect, width: f64, height: f64) -> Option<WorldRect> {
    let left = rect.x.max(0.0);
    let right = rect.right().min(width);
    let top = rect.y.max(0.0);
    let bottom = rect.bottom().min(height);
    if right <= left || bottom <= top {
        return None;
    }
    Some(WorldRect {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    })
}

/// Render the playfield: obstacles and the player on a braille canvas.
fn render_play_area(frame: &mut Frame, area: Rect, game: &Game) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = game.config.field_width;
    let h = game.config.field_height;

    // One braille column is half a cell wide
    let fill_step = (w / (area.width as f64 * 2.0)).max(0.5);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(Color::Rgb(20, 40, 60))
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            for obstacle in &game.obstacles {
                let segments = [obstacle.top_rect(), obstacle.bottom_rect(h)];
                for segment in segments {
                    let Some(visible) = clip_to_field(segment, w, h) else {
                        continue;
                    };
                    // Canvas y grows upward
                    let y1 = h - visible.bottom();
                    let y2 = h - visible.y;
                    let mut x = visible.x;
                    while x <= visible.right() {
                        ctx.draw(&CanvasLine {
                            x1: x,
                            y1,
                            x2: x,
                            y2,
                            color: Color::Green,
                        });
                        x += fill_step;
                    }
                }
            }

            ctx.layer();

            let player = &game.player;
            let color = if game.is_alive() {
                Color::Yellow
            } else {
                Color::Red
            };
            for fraction in [1.0, 0.66, 0.33] {
                ctx.draw(&Circle {
                    x: player.x,
                    y: h - player.y,
                    radius: player.radius * fraction,
                    color,
                });
            }
        });

    frame.render_widget(canvas, area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &Game) {
    match game.status {
        RunStatus::Alive => render_status_bar(
            frame,
            area,
            "Space / click to flap",
            Color::Yellow,
            &CONTROLS,
        ),
        RunStatus::Over => render_status_bar(
            frame,
            area,
            "Crashed! Space / click to restart",
            Color::Red,
            &CONTROLS,
        ),
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state_text, state_color) = match game.status {
        RunStatus::Alive => ("Flying", Color::Green),
        RunStatus::Over => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state_text),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.best),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_crash_popup(frame: &mut Frame, area: Rect, game: &Game) {
    let mut lines = vec![Line::from(Span::styled(
        format!("You passed {} pipes.", game.score),
        Style::default().fg(Color::White),
    ))];
    if game.score > 0 && game.score == game.best {
        lines.push(Line::from(Span::styled(
            "New best!",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space/Click] restart",
        Style::default().fg(Color::DarkGray),
    )));

    render_game_over_popup(frame, area, "GAME OVER", &lines);
}

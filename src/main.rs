//! Ball World entry point
//!
//! The frame loop: poll the mouse, run fixed-timestep simulation ticks
//! through the accumulator, then draw the world. All gameplay rules live in
//! `ball_world::sim`; this binary only translates events in and pixels out.

use macroquad::prelude::{
    BLACK, Color, Conf, KeyCode, MouseButton, WHITE, clear_background, draw_circle,
    draw_circle_lines, draw_line, draw_rectangle, draw_rectangle_lines, draw_text, get_frame_time,
    is_key_pressed, is_mouse_button_pressed, is_mouse_button_released, mouse_position, next_frame,
};

use ball_world::consts::*;
use ball_world::sim::{
    InputInterpreter, PointerButton, PointerEvent, PointerMode, Rect, World, WorldConfig, tick,
};

const BACKGROUND: Color = WHITE;
const SUCTION_FILL: Color = Color::new(40.0 / 255.0, 120.0 / 255.0, 1.0, 50.0 / 255.0);
const SUCTION_BORDER: Color = Color::new(40.0 / 255.0, 120.0 / 255.0, 1.0, 1.0);
const DELETION_FILL: Color = Color::new(1.0, 80.0 / 255.0, 80.0 / 255.0, 35.0 / 255.0);
const DELETION_BORDER: Color = Color::new(220.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0);
const AIM_LINE: Color = Color::new(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 0.7);
const HUD_TEXT: Color = Color::new(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: "Ball World".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn seed_from_env() -> u64 {
    std::env::var("BALL_WORLD_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED)
}

/// Translate this frame's mouse state into pointer events
fn pump_pointer_events(interp: &mut InputInterpreter) {
    let (mx, my) = mouse_position();
    interp.apply(PointerEvent::Moved(glam::Vec2::new(mx, my)));

    for (button, pointer) in [
        (MouseButton::Left, PointerButton::Left),
        (MouseButton::Right, PointerButton::Right),
    ] {
        if is_mouse_button_pressed(button) {
            interp.apply(PointerEvent::ButtonDown(pointer));
        }
        if is_mouse_button_released(button) {
            interp.apply(PointerEvent::ButtonUp(pointer));
        }
    }
}

fn draw_world(world: &World, interp: &InputInterpreter) {
    clear_background(BACKGROUND);

    if let Some(zone) = world.deletion_zone {
        draw_rectangle(zone.x, zone.y, zone.w, zone.h, DELETION_FILL);
        draw_rectangle_lines(zone.x, zone.y, zone.w, zone.h, 2.0, DELETION_BORDER);
    }

    for ball in &world.balls {
        let color = Color::from_rgba(ball.color.r, ball.color.g, ball.color.b, 255);
        draw_circle(ball.pos.x, ball.pos.y, ball.radius, color);
        draw_circle_lines(ball.pos.x, ball.pos.y, ball.radius, 1.0, BLACK);
    }

    match interp.mode() {
        PointerMode::Vacuuming => {
            let cursor = interp.cursor();
            draw_circle(cursor.x, cursor.y, SUCTION_RADIUS, SUCTION_FILL);
            draw_circle_lines(cursor.x, cursor.y, SUCTION_RADIUS, 2.0, SUCTION_BORDER);
        }
        PointerMode::Aiming { .. } => {
            if let Some((start, cursor)) = interp.aim() {
                draw_line(start.x, start.y, cursor.x, cursor.y, 2.0, AIM_LINE);
                draw_circle(start.x, start.y, 3.0, AIM_LINE);
            }
        }
        PointerMode::Idle => {}
    }

    draw_text(
        &format!("Inventory: {}", world.inventory.len()),
        10.0,
        20.0,
        20.0,
        HUD_TEXT,
    );
    draw_text(
        &format!("LMB: vacuum | RMB drag+release: spit x{SPIT_COUNT} | Esc: quit"),
        10.0,
        40.0,
        20.0,
        HUD_TEXT,
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let seed = seed_from_env();
    let mut world = World::new(WorldConfig::default(), seed);
    world.deletion_zone = Some(Rect::from(DELETION_ZONE));
    world.spawn_initial(
        INITIAL_BALL_COUNT,
        (BALL_RADIUS_MIN, BALL_RADIUS_MAX),
        BALL_SPEED_MAX,
    );
    log::info!(
        "world ready: seed={seed}, {} balls",
        world.balls.len()
    );

    let mut interp = InputInterpreter::new(SPIT_COUNT);
    let mut accumulator = 0.0f32;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        pump_pointer_events(&mut interp);

        accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = interp.tick_input();
            for event in tick(&mut world, &input, SIM_DT) {
                log::debug!("tick {}: {event:?}", world.time_ticks);
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop time we cannot catch up on; stalls should not cause a burst
        if substeps == MAX_SUBSTEPS {
            accumulator = 0.0;
        }

        draw_world(&world, &interp);
        next_frame().await;
    }

    log::info!("bye");
}

use macroquad::prelude::*;

use crate::application::SimulationState;

pub const BACKGROUND: Color = Color {
    r: 0.0,
    g: 4.0 / 255.0,
    b: 53.0 / 255.0,
    a: 1.0,
};
pub const CELL_COLOR: Color = WHITE;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw every live cell as a filled square, skipping those off screen
pub fn draw_cells(state: &SimulationState) {
    let size = state.grid.resolution().get() as f32;
    let (area_width, area_height) = (screen_width(), screen_height());

    for &cell in state.grid.iter() {
        let (screen_x, screen_y) = state.camera.grid_to_screen(cell);

        if screen_x + size < 0.0 || screen_x > area_width || screen_y + size < 0.0 || screen_y > area_height {
            continue;
        }

        draw_rectangle(screen_x, screen_y, size, size, CELL_COLOR);
    }
}

/// Draw the status overlay in the top-left corner
pub fn draw_status(state: &SimulationState) {
    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        (format!("Generation: {}", state.generation), WHITE),
        (format!("Population: {}", format_number(state.grid.len())), WHITE),
        (format!("Cell size: {}", state.grid.resolution()), WHITE),
        (
            if state.is_running { "Running".to_owned() } else { "Idle (Enter to run)".to_owned() },
            status_color,
        ),
        (
            format!("{} | step {:.1}ms | FPS {}", state.algorithm, state.last_step_time_ms, get_fps()),
            GRAY,
        ),
        (format!("Camera: ({}, {})", state.camera.offset_x, state.camera.offset_y), GRAY),
    ];

    labels.iter().enumerate().for_each(|(i, (text, color))| {
        draw_text(text, 10.0, 20.0 + i as f32 * 16.0, 16.0, *color);
    });
}

/// Clear the frame and draw cells plus overlay
pub fn draw_frame(state: &SimulationState) {
    clear_background(BACKGROUND);
    draw_cells(state);
    draw_status(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}

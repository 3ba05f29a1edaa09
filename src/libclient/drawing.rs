use crate::libclient::{
    layout::{
        choice_button, computer_icon, contains, icon_origin, play_again_button, INSTRUCTION_Y,
        PLAYER_LABEL_Y, COMPUTER_ROW_Y, RESULT_LABEL_Y,
    },
    settings::{
        COMPUTER_PREFIX, FONT_SIZE, INSTRUCTION, MARGIN, PLAYER_PREFIX, PLAY_AGAIN, RESULT_PREFIX,
    },
    textures::TextureStore,
};
use crate::libgame::{round::Snapshot, rules::Choice};
use raylib::prelude::*;

fn label(prefix: &str, value: Option<&str>) -> String {
    format!("{}{}", prefix, value.unwrap_or(""))
}

pub fn player_label(snapshot: &Snapshot) -> String {
    label(PLAYER_PREFIX, snapshot.player.map(Choice::name))
}

pub fn computer_label(snapshot: &Snapshot) -> String {
    label(COMPUTER_PREFIX, snapshot.computer.map(Choice::name))
}

pub fn result_label(snapshot: &Snapshot) -> String {
    label(RESULT_PREFIX, snapshot.outcome.map(|o| o.message()))
}

fn button_tint(enabled: bool, hovered: bool) -> Color {
    match (enabled, hovered) {
        (false, _) => Color::GRAY,
        (true, true) => Color::SKYBLUE,
        (true, false) => Color::LIGHTGRAY,
    }
}

pub fn retry(draw_handle: &RaylibDrawHandle, snapshot: &Snapshot) -> bool {
    snapshot.play_again_enabled() && draw_handle.is_key_pressed(KeyboardKey::KEY_ENTER)
}

pub fn draw_choices(
    draw_handle: &mut RaylibDrawHandle,
    ts: &TextureStore,
    snapshot: &Snapshot,
    mouse: Vector2,
) {
    for choice in Choice::ALL.iter() {
        let cell = choice_button(*choice);
        let hovered = contains(cell, mouse);
        draw_handle.draw_rectangle_rec(cell, button_tint(snapshot.inputs_enabled, hovered));

        let origin = icon_origin(cell);
        let icon_tint = if snapshot.inputs_enabled {
            Color::WHITE
        } else {
            Color::DARKGRAY
        };
        draw_handle.draw_texture(ts.get(*choice), origin.x as i32, origin.y as i32, icon_tint);
    }
}

pub fn draw_outcome(draw_handle: &mut RaylibDrawHandle, ts: &TextureStore, snapshot: &Snapshot) {
    let x = MARGIN as i32;
    draw_handle.draw_text(
        &player_label(snapshot),
        x,
        PLAYER_LABEL_Y as i32,
        FONT_SIZE,
        Color::BLACK,
    );
    let computer_text = computer_label(snapshot);
    draw_handle.draw_text(
        &computer_text,
        x,
        COMPUTER_ROW_Y as i32,
        FONT_SIZE,
        Color::BLACK,
    );
    if let Some(computer) = snapshot.computer {
        let at = computer_icon(measure_text(&computer_text, FONT_SIZE));
        draw_handle.draw_texture(ts.get(computer), at.x as i32, at.y as i32, Color::WHITE);
    }
    draw_handle.draw_text(
        &result_label(snapshot),
        x,
        RESULT_LABEL_Y as i32,
        FONT_SIZE,
        Color::BLACK,
    );
}

pub fn draw_play_again(draw_handle: &mut RaylibDrawHandle, snapshot: &Snapshot, mouse: Vector2) {
    let button = play_again_button();
    let enabled = snapshot.play_again_enabled();
    draw_handle.draw_rectangle_rec(button, button_tint(enabled, contains(button, mouse)));

    let text_width = measure_text(PLAY_AGAIN, FONT_SIZE);
    let text_color = if enabled { Color::BLACK } else { Color::DARKGRAY };
    draw_handle.draw_text(
        PLAY_AGAIN,
        (button.x + (button.width - text_width as f32) / 2.0) as i32,
        (button.y + (button.height - FONT_SIZE as f32) / 2.0) as i32,
        FONT_SIZE,
        text_color,
    );
}

pub fn draw_frame(
    draw_handle: &mut RaylibDrawHandle,
    ts: &TextureStore,
    snapshot: &Snapshot,
    mouse: Vector2,
) {
    draw_handle.clear_background(Color::WHITE);
    draw_handle.draw_text(
        INSTRUCTION,
        MARGIN as i32,
        INSTRUCTION_Y as i32,
        FONT_SIZE,
        Color::BLACK,
    );
    draw_choices(draw_handle, ts, snapshot, mouse);
    draw_outcome(draw_handle, ts, snapshot);
    draw_play_again(draw_handle, snapshot, mouse);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libgame::rules::Outcome;

    #[test]
    fn test_blank_labels() {
        let s = Snapshot {
            player: None,
            computer: None,
            outcome: None,
            inputs_enabled: true,
        };
        assert_eq!(player_label(&s), "Your choice: ");
        assert_eq!(computer_label(&s), "Computer's choice: ");
        assert_eq!(result_label(&s), "Result: ");
    }

    #[test]
    fn test_round_labels() {
        let s = Snapshot {
            player: Some(Choice::Rock),
            computer: Some(Choice::Scissors),
            outcome: Some(Outcome::Win),
            inputs_enabled: false,
        };
        assert_eq!(player_label(&s), "Your choice: rock");
        assert_eq!(computer_label(&s), "Computer's choice: scissors");
        assert_eq!(result_label(&s), "Result: You win!");
    }
}

//! where every widget sits, and which widget a click lands on

use crate::libclient::settings::{
    BUTTON_GAP, BUTTON_SIZE, FONT_SIZE, ICON_SIZE, MARGIN, WINDOW_WIDTH,
};
use crate::libgame::{
    round::{Event, Snapshot},
    rules::Choice,
};
use raylib::prelude::*;

pub const INSTRUCTION_Y: f32 = 16.0;
pub const BUTTONS_Y: f32 = 50.0;
pub const PLAYER_LABEL_Y: f32 = 230.0;
pub const COMPUTER_ROW_Y: f32 = 260.0;
pub const RESULT_LABEL_Y: f32 = 425.0;
pub const PLAY_AGAIN_Y: f32 = 460.0;

/// Clears "Computer's choice: scissors" in the default font.
const COMPUTER_ICON_X: f32 = 330.0;
const LABEL_GAP: f32 = 10.0;

pub fn choice_button(choice: Choice) -> Rectangle {
    let row_width = 3.0 * BUTTON_SIZE + 2.0 * BUTTON_GAP;
    let left = (WINDOW_WIDTH as f32 - row_width) / 2.0;
    Rectangle {
        x: left + choice.index() as f32 * (BUTTON_SIZE + BUTTON_GAP),
        y: BUTTONS_Y,
        width: BUTTON_SIZE,
        height: BUTTON_SIZE,
    }
}

/// Top-left corner of an icon centred in `cell`.
pub fn icon_origin(cell: Rectangle) -> Vector2 {
    let inset = (cell.width - ICON_SIZE as f32) / 2.0;
    Vector2 {
        x: cell.x + inset,
        y: cell.y + inset,
    }
}

/// Sits right of the computer label, `label_width` pixels wide.
pub fn computer_icon(label_width: i32) -> Vector2 {
    Vector2 {
        x: COMPUTER_ICON_X.max(MARGIN + label_width as f32 + LABEL_GAP),
        y: COMPUTER_ROW_Y,
    }
}

pub fn play_again_button() -> Rectangle {
    Rectangle {
        x: MARGIN,
        y: PLAY_AGAIN_Y,
        width: 160.0,
        height: FONT_SIZE as f32 * 2.0,
    }
}

pub fn contains(rec: Rectangle, point: Vector2) -> bool {
    point.x >= rec.x
        && point.x < rec.x + rec.width
        && point.y >= rec.y
        && point.y < rec.y + rec.height
}

/// The event a click at `point` produces, if it hits an enabled widget.
pub fn hit_test(point: Vector2, snapshot: &Snapshot) -> Option<Event> {
    if snapshot.inputs_enabled {
        Choice::ALL
            .iter()
            .find(|c| contains(choice_button(**c), point))
            .map(|c| Event::ChoiceSubmitted(*c))
    } else if snapshot.play_again_enabled() && contains(play_again_button(), point) {
        Some(Event::PlayAgainRequested)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(rec: Rectangle) -> Vector2 {
        Vector2 {
            x: rec.x + rec.width / 2.0,
            y: rec.y + rec.height / 2.0,
        }
    }

    fn awaiting() -> Snapshot {
        Snapshot {
            player: None,
            computer: None,
            outcome: None,
            inputs_enabled: true,
        }
    }

    fn complete() -> Snapshot {
        Snapshot {
            player: Some(Choice::Rock),
            computer: Some(Choice::Paper),
            outcome: Some(crate::libgame::rules::Outcome::Lose),
            inputs_enabled: false,
        }
    }

    #[test]
    fn test_buttons_fit_window_and_do_not_overlap() {
        let rects: Vec<Rectangle> = Choice::ALL.iter().map(|c| choice_button(*c)).collect();
        assert!(rects[0].x >= 0.0);
        assert!(rects[2].x + rects[2].width <= WINDOW_WIDTH as f32);
        assert!(rects[0].x + rects[0].width <= rects[1].x);
        assert!(rects[1].x + rects[1].width <= rects[2].x);
    }

    #[test]
    fn test_icon_centred() {
        let cell = choice_button(Choice::Paper);
        let origin = icon_origin(cell);
        assert_eq!(origin.x - cell.x, 5.0);
        assert_eq!(origin.y - cell.y, 5.0);
    }

    #[test]
    fn test_computer_icon_clears_label() {
        // "Computer's choice: scissors" measured with raylib's default font at size 20
        let widest = 284;
        let icon = computer_icon(widest);
        assert!(icon.x >= MARGIN + widest as f32);
        assert!(icon.x + ICON_SIZE as f32 <= WINDOW_WIDTH as f32);

        // no window means measure_text reports 0, the fixed column still clears it
        assert!(computer_icon(0).x >= MARGIN + widest as f32);
        assert_eq!(computer_icon(400).x, MARGIN + 400.0 + LABEL_GAP);
    }

    #[test]
    fn test_click_on_choice() {
        for c in Choice::ALL.iter() {
            match hit_test(centre(choice_button(*c)), &awaiting()) {
                Some(Event::ChoiceSubmitted(hit)) => assert_eq!(hit, *c),
                _ => panic!("missed {}", c),
            }
        }
    }

    #[test]
    fn test_disabled_widgets_ignore_clicks() {
        assert!(hit_test(centre(play_again_button()), &awaiting()).is_none());
        assert!(hit_test(centre(choice_button(Choice::Rock)), &complete()).is_none());
    }

    #[test]
    fn test_click_on_play_again() {
        assert!(matches!(
            hit_test(centre(play_again_button()), &complete()),
            Some(Event::PlayAgainRequested)
        ));
    }

    #[test]
    fn test_click_between_buttons() {
        let gap = Vector2 {
            x: choice_button(Choice::Rock).x + BUTTON_SIZE + BUTTON_GAP / 2.0,
            y: BUTTONS_Y + 10.0,
        };
        assert!(hit_test(gap, &awaiting()).is_none());
    }
}

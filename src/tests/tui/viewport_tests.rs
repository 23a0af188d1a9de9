use super::*;

#[test]
fn scrolls_up_to_reveal_cursor() {
    assert_eq!(ensure_visible(0, 5, 3, 10), 0);
    assert_eq!(ensure_visible(4, 6, 3, 10), 4);
}

#[test]
fn scrolls_down_to_reveal_cursor() {
    assert_eq!(ensure_visible(9, 0, 3, 10), 7);
    assert_eq!(ensure_visible(3, 0, 3, 10), 1);
}

#[test]
fn short_lists_pin_to_top() {
    assert_eq!(ensure_visible(2, 0, 10, 3), 0);
    assert_eq!(ensure_visible(1, 4, 10, 3), 0);
}

#[test]
fn keeps_offset_when_cursor_already_visible() {
    assert_eq!(ensure_visible(5, 4, 3, 10), 4);
}

#[test]
fn clamps_offset_after_view_grows() {
    assert_eq!(ensure_visible(9, 7, 6, 10), 4);
}

#[test]
fn zero_height_resets() {
    assert_eq!(ensure_visible(5, 3, 0, 10), 0);
}

#[test]
fn cursor_stays_in_window_for_every_combination() {
    for total in 1..12usize {
        for height in 1..8usize {
            for offset in 0..14usize {
                for cursor in 0..total {
                    let next = ensure_visible(cursor, offset, height, total);
                    assert!(next <= cursor && cursor < next + height);
                    assert!(next <= total.saturating_sub(height));
                }
            }
        }
    }
}

#[test]
fn view_height_reserves_header_and_never_hits_zero() {
    assert_eq!(view_height(24), 22);
    assert_eq!(view_height(3), 1);
    assert_eq!(view_height(2), 1);
    assert_eq!(view_height(0), 1);
}

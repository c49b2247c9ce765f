use folio::tui::carousel_state::{CarouselGeometry, CarouselState};

fn reference_state(item_count: usize) -> CarouselState {
    // Default geometry: card width 350, gap 32, stride 382.
    CarouselState::new(item_count)
}

#[test]
fn test_offset_zero_is_first_card() {
    let mut state = reference_state(3);
    state.handle_scroll(0);
    assert_eq!(state.current_index, 0);
}

#[test]
fn test_offset_one_stride_is_second_card() {
    let mut state = reference_state(3);
    state.handle_scroll(382);
    assert_eq!(state.current_index, 1);
}

#[test]
fn test_offset_two_strides_is_third_card() {
    let mut state = reference_state(3);
    state.handle_scroll(764);
    assert_eq!(state.current_index, 2);
}

#[test]
fn test_midpoint_rounds_up() {
    let mut state = reference_state(3);

    state.handle_scroll(191);
    assert_eq!(state.current_index, 1);

    state.handle_scroll(190);
    assert_eq!(state.current_index, 0);
}

#[test]
fn test_offset_clamps_to_last_card() {
    let mut state = reference_state(3);
    state.handle_scroll(100_000);
    assert_eq!(state.offset, 764);
    assert_eq!(state.current_index, 2);
}

#[test]
fn test_empty_list_stays_at_zero() {
    let mut state = reference_state(0);
    state.handle_scroll(500);
    assert_eq!(state.current_index, 0);

    state.scroll_to(0);
    state.tick();
    assert_eq!(state.current_index, 0);
}

#[test]
fn test_single_item_stays_at_zero() {
    let mut state = reference_state(1);
    state.handle_scroll(900);
    assert_eq!(state.offset, 0);
    assert_eq!(state.current_index, 0);
}

#[test]
fn test_scroll_to_does_not_write_index_directly() {
    let mut state = reference_state(3);
    state.scroll_to(2);
    assert_eq!(state.current_index, 0);
    assert!(!state.is_settled());
}

#[test]
fn test_scroll_to_settles_through_animation() {
    let mut state = reference_state(3);
    state.scroll_to(1);

    for _ in 0..1000 {
        if state.is_settled() {
            break;
        }
        state.tick();
    }

    assert!(state.is_settled());
    assert_eq!(state.offset, 382);
    assert_eq!(state.current_index, 1);
}

#[test]
fn test_scroll_to_out_of_bounds_is_ignored() {
    let mut state = reference_state(3);
    state.scroll_to(3);
    assert!(state.is_settled());
    state.tick();
    assert_eq!(state.offset, 0);
}

#[test]
fn test_manual_scroll_cancels_target() {
    let mut state = reference_state(3);
    state.scroll_to(2);
    state.scroll_by(10);
    assert!(state.is_settled());
}

#[test]
fn test_scroll_by_negative_saturates() {
    let mut state = reference_state(3);
    state.scroll_by(-50);
    assert_eq!(state.offset, 0);
}

#[test]
fn test_next_and_prev_card_clamp() {
    let mut state = reference_state(2);

    state.prev_card();
    while !state.is_settled() {
        state.tick();
    }
    assert_eq!(state.current_index, 0);

    state.next_card();
    while !state.is_settled() {
        state.tick();
    }
    assert_eq!(state.current_index, 1);

    state.next_card();
    while !state.is_settled() {
        state.tick();
    }
    assert_eq!(state.current_index, 1);
}

#[test]
fn test_injected_geometry_changes_stride() {
    let geometry = CarouselGeometry {
        card_width: 40,
        gap: 4,
    };
    let mut state = CarouselState::with_geometry(3, geometry);

    state.handle_scroll(44);
    assert_eq!(state.current_index, 1);

    state.handle_scroll(21);
    assert_eq!(state.current_index, 0);
    state.handle_scroll(22);
    assert_eq!(state.current_index, 1);
}

#[test]
fn test_geometry_change_keeps_current_card() {
    let mut state = reference_state(3);
    state.handle_scroll(764);
    assert_eq!(state.current_index, 2);

    state.set_geometry(CarouselGeometry {
        card_width: 40,
        gap: 4,
    });
    assert_eq!(state.current_index, 2);
    assert_eq!(state.offset, 88);
}

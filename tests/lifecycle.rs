// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use std::time::Duration;
use toast_lens::notifications::{Message, ToastCenter, ToastRequest};
use toast_lens::{DisplayHint, Phase, Severity};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn test_toast() -> ToastRequest {
    ToastRequest::success("Test").with_duration_ms(3000)
}

fn is_present(center: &ToastCenter, message: &str) -> bool {
    center.toasts().iter().any(|view| view.message == message)
}

#[test]
fn toast_auto_dismisses_after_duration_and_exit_delay() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    assert!(is_present(&center, "Test"));

    center.advance(ms(3000));
    assert!(is_present(&center, "Test"), "still animating out");
    center.advance(ms(300));

    assert!(!is_present(&center, "Test"));
}

#[test]
fn untouched_toast_is_removed_exactly_at_duration_plus_exit_delay() {
    let mut center = ToastCenter::default();
    center.add_toast(ToastRequest::warning("Exact").with_duration_ms(1234));

    center.advance(ms(1233));
    let id = center.find("Exact", Severity::Warning).unwrap();
    assert_eq!(center.phase(id), Some(Phase::Running));

    center.advance(ms(1));
    assert_eq!(center.phase(id), Some(Phase::Exiting));

    center.advance(ms(299));
    assert!(is_present(&center, "Exact"));
    center.advance(ms(1));
    assert!(!is_present(&center, "Exact"));
}

#[test]
fn hovered_toast_does_not_disappear() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.advance(ms(2000));
    assert!(is_present(&center, "Test"));

    center.handle_message(&Message::PointerEntered(id));
    center.advance(ms(10_000));

    assert!(is_present(&center, "Test"));
    assert_eq!(center.remaining(id), Some(ms(1000)));
}

#[test]
fn resume_dismisses_with_correct_remaining_time() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.advance(ms(2000));
    center.handle_message(&Message::PointerEntered(id));
    center.advance(ms(5000));
    center.handle_message(&Message::PointerLeft(id));

    center.advance(ms(500));
    assert!(is_present(&center, "Test"));

    center.advance(ms(500));
    center.advance(ms(300));
    assert!(!is_present(&center, "Test"));
}

#[test]
fn pointer_leave_without_enter_is_a_no_op() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.advance(ms(1000));
    center.pointer_left(id);
    assert_eq!(center.remaining(id), Some(ms(2000)));

    center.advance(ms(2300));
    assert!(!is_present(&center, "Test"));
}

#[test]
fn duplicate_toasts_are_coalesced() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    center.add_toast(test_toast());

    let matching = center
        .toasts()
        .into_iter()
        .filter(|view| view.message == "Test")
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn duplicate_resets_countdown_so_toast_stays_longer() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());

    center.advance(ms(2000));
    assert!(is_present(&center, "Test"));

    center.add_toast(test_toast());

    // 4 s total: gone by now without the reset
    center.advance(ms(2000));
    assert!(is_present(&center, "Test"));

    center.advance(ms(1000));
    center.advance(ms(300));
    assert!(!is_present(&center, "Test"));
}

#[test]
fn duplicate_while_paused_refreshes_but_does_not_resume() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.advance(ms(2000));
    center.pointer_entered(id);
    center.add_toast(test_toast());

    assert_eq!(center.phase(id), Some(Phase::Paused));
    assert_eq!(center.remaining(id), Some(ms(3000)));

    // Still frozen long after the refreshed duration
    center.advance(ms(20_000));
    assert!(is_present(&center, "Test"));

    center.pointer_left(id);
    center.advance(ms(2999));
    assert_eq!(center.phase(id), Some(Phase::Running));
    center.advance(ms(301));
    assert!(!is_present(&center, "Test"));
}

#[test]
fn duplicate_while_exiting_does_not_cancel_removal() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.close(id);
    center.advance(ms(100));
    center.add_toast(test_toast());

    assert_eq!(center.len(), 1);
    assert_eq!(center.phase(id), Some(Phase::Exiting));
    assert_eq!(center.toasts()[0].hint, DisplayHint::Exiting);

    center.advance(ms(200));
    assert!(center.is_empty());
}

#[test]
fn duplicate_after_expiry_removal_is_a_fresh_toast() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let first = center.find("Test", Severity::Success).unwrap();

    center.advance(ms(3100));
    assert_eq!(center.phase(first), Some(Phase::Exiting));
    center.add_toast(test_toast());
    center.advance(ms(200));
    assert!(center.is_empty());

    center.add_toast(test_toast());
    let second = center.find("Test", Severity::Success).unwrap();
    assert_ne!(first, second);
    assert_eq!(center.phase(second), Some(Phase::Running));
}

#[test]
fn different_messages_have_independent_countdowns() {
    let mut center = ToastCenter::default();
    center.add_toast(ToastRequest::success("First").with_duration_ms(3000));
    center.advance(ms(1000));
    center.add_toast(ToastRequest::success("Second").with_duration_ms(3000));

    assert!(is_present(&center, "First"));
    assert!(is_present(&center, "Second"));
    let order: Vec<_> = center.toasts().into_iter().map(|view| view.message).collect();
    assert_eq!(order, vec!["First", "Second"]);

    center.advance(ms(2300));
    assert!(!is_present(&center, "First"));
    assert!(is_present(&center, "Second"));

    center.advance(ms(1000));
    assert!(center.is_empty());
}

#[test]
fn close_button_removes_after_exit_animation() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.handle_message(&Message::Close(id));
    assert_eq!(center.phase(id), Some(Phase::Exiting));

    center.advance(ms(299));
    assert!(is_present(&center, "Test"));
    center.advance(ms(1));
    assert!(!is_present(&center, "Test"));
}

#[test]
fn double_close_does_not_extend_exit() {
    let mut center = ToastCenter::default();
    center.add_toast(test_toast());
    let id = center.find("Test", Severity::Success).unwrap();

    center.close(id);
    center.advance(ms(200));
    center.close(id);
    center.pointer_entered(id);
    center.advance(ms(100));

    assert!(center.is_empty());
}

#[test]
fn non_positive_duration_falls_back_to_default() {
    let mut center = ToastCenter::default();
    center.add_toast(ToastRequest::error("Broken").with_duration_ms(-10));

    center.advance(ms(3299));
    assert!(is_present(&center, "Broken"));
    center.advance(ms(1));
    assert!(!is_present(&center, "Broken"));
}

#[test]
fn at_most_one_toast_per_message_and_severity() {
    let messages = ["Saved", "Failed", "Offline"];
    let severities = [Severity::Success, Severity::Error, Severity::Warning];
    let mut center = ToastCenter::default();

    // Deterministic pseudo-random sequence of adds interleaved with time
    let mut seed: u64 = 0x5eed;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let message = messages[(seed >> 33) as usize % messages.len()];
        let severity = severities[(seed >> 17) as usize % severities.len()];
        center.add_toast(ToastRequest::new(severity, message));
        center.advance(ms((seed >> 40) % 700));

        let views = center.toasts();
        let unique: HashSet<_> = views
            .iter()
            .map(|view| (view.message.clone(), view.severity))
            .collect();
        assert_eq!(unique.len(), views.len());
        assert_eq!(center.pending_timers(), views.len());
    }
}

use desktop_runtime::{
    geometry::maximized_rect, project_taskbar, reduce_desktop, DesktopAction, DesktopInventory,
    DesktopState, InteractionState, Point, RuntimeEffect, Size, Viewport, WindowId, WindowStack,
    TASKBAR_HEIGHT,
};
use pretty_assertions::assert_eq;

const VIEWPORT: Viewport = Viewport::new(1280, 800);

struct Desktop {
    state: DesktopState,
    interaction: InteractionState,
}

impl Desktop {
    fn new() -> Self {
        Self {
            state: DesktopState::new(VIEWPORT),
            interaction: InteractionState::default(),
        }
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(
            &mut self.state,
            &mut self.interaction,
            DesktopInventory::builtin(),
            action,
        )
    }

    fn open(&mut self, id: &str) {
        self.dispatch(DesktopAction::ActivateEntry {
            entry_id: id.to_string(),
            now_ms: 1_000,
        });
    }

    fn z(&self, id: &str) -> u64 {
        self.state
            .stack
            .get(&WindowId::from(id))
            .map(|w| w.z_index)
            .expect("window is open")
    }

    fn active(&self) -> Option<&str> {
        self.state.active_window_id().map(WindowId::as_str)
    }
}

fn id(raw: &str) -> WindowId {
    WindowId::from(raw)
}

#[test]
fn opening_three_windows_stacks_them_in_open_order() {
    let mut desktop = Desktop::new();
    desktop.open("chat");
    desktop.open("resume");
    desktop.open("contact");

    assert!(desktop.z("chat") < desktop.z("resume"));
    assert!(desktop.z("resume") < desktop.z("contact"));
    assert_eq!(desktop.active(), Some("contact"));
}

#[test]
fn taskbar_click_brings_the_first_window_to_front() {
    let mut desktop = Desktop::new();
    desktop.open("chat");
    desktop.open("resume");
    desktop.open("contact");
    let (resume_before, contact_before) = (desktop.z("resume"), desktop.z("contact"));

    desktop.dispatch(DesktopAction::ActivateTaskbarButton {
        window_id: id("chat"),
    });

    assert_eq!(desktop.active(), Some("chat"));
    assert_eq!(desktop.z("resume"), resume_before);
    assert_eq!(desktop.z("contact"), contact_before);
    assert!(desktop.z("chat") > contact_before);
}

#[test]
fn maximized_window_does_not_affect_a_newly_opened_one() {
    let mut desktop = Desktop::new();
    desktop.open("resume");
    desktop.dispatch(DesktopAction::MaximizeWindow {
        window_id: id("resume"),
    });
    desktop.open("contact");

    let contact = desktop.state.stack.get(&id("contact")).expect("contact open");
    assert!(!contact.is_maximized);
    assert_eq!(contact.position, Point::new(130, 130));

    desktop.dispatch(DesktopAction::CloseWindow {
        window_id: id("resume"),
    });
    assert!(!desktop.state.stack.contains(&id("resume")));
    assert_eq!(desktop.state.stack.len(), 1);
}

#[test]
fn minimizing_the_active_window_hands_focus_to_the_next_visible_one() {
    let mut desktop = Desktop::new();
    desktop.open("chat");
    desktop.open("resume");

    desktop.dispatch(DesktopAction::MinimizeWindow {
        window_id: id("resume"),
    });
    assert_eq!(desktop.active(), Some("chat"));

    desktop.dispatch(DesktopAction::MinimizeWindow {
        window_id: id("chat"),
    });
    assert_eq!(desktop.active(), None);
}

#[test]
fn double_open_focuses_and_unminimizes_without_duplicating() {
    let mut desktop = Desktop::new();
    desktop.open("chat");
    desktop.open("resume");
    desktop.dispatch(DesktopAction::MinimizeWindow {
        window_id: id("chat"),
    });

    desktop.open("chat");

    assert_eq!(desktop.state.stack.len(), 2);
    assert_eq!(desktop.active(), Some("chat"));
    assert!(!desktop.state.stack.get(&id("chat")).expect("open").is_minimized);
}

#[test]
fn taskbar_projection_tracks_every_open_window() {
    let mut desktop = Desktop::new();
    desktop.open("chat");
    desktop.open("resume");
    desktop.dispatch(DesktopAction::MinimizeWindow {
        window_id: id("resume"),
    });

    let buttons = project_taskbar(&desktop.state.stack, DesktopInventory::builtin());
    let summary: Vec<(&str, bool, bool)> = buttons
        .iter()
        .map(|b| (b.window_id.as_str(), b.is_active, b.is_minimized))
        .collect();
    assert_eq!(summary, vec![("chat", true, false), ("resume", false, true)]);
    assert_eq!(buttons[1].label, "Resume.pdf");
}

#[test]
fn unknown_entry_and_stale_ids_are_silent_no_ops() {
    let mut desktop = Desktop::new();
    desktop.open("resume");
    let before = desktop.state.clone();

    desktop.open("does-not-exist");
    for action in [
        DesktopAction::FocusWindow { window_id: id("gone") },
        DesktopAction::MinimizeWindow { window_id: id("gone") },
        DesktopAction::MaximizeWindow { window_id: id("gone") },
        DesktopAction::RestoreWindow { window_id: id("gone") },
        DesktopAction::CloseWindow { window_id: id("gone") },
    ] {
        assert!(desktop.dispatch(action).is_empty());
    }

    assert_eq!(desktop.state, before);
}

#[test]
fn stack_never_holds_duplicate_ids_across_open_close_sequences() {
    let mut stack = WindowStack::new(VIEWPORT);
    let size = Size::new(300, 200);
    let script = ["a", "b", "a", "c", "b", "a", "c", "c", "b"];
    for (step, raw) in script.iter().enumerate() {
        if step % 3 == 2 {
            stack.close(&id(raw));
        } else {
            stack.open(id(raw), *raw, Point::new(0, 0), size);
        }
        let mut ids: Vec<&str> = stack.windows().iter().map(|w| w.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate after step {step}");
    }
}

#[test]
fn maximize_restore_round_trip_and_clamped_drags() {
    let mut stack = WindowStack::new(VIEWPORT);
    let a = id("a");
    stack.open(a.clone(), "A", Point::new(70, 90), Size::new(400, 300));
    let before = stack.get(&a).expect("open").geometry();

    assert!(stack.maximize(&a));
    assert_eq!(stack.get(&a).expect("open").geometry(), maximized_rect(VIEWPORT));
    assert!(!stack.set_position(&a, 5, 5));
    assert!(stack.restore(&a));
    assert_eq!(stack.get(&a).expect("open").geometry(), before);

    for (x, y) in [(-5_000, -5_000), (5_000, 5_000), (123, 456)] {
        stack.set_position(&a, x, y);
        let position = stack.get(&a).expect("open").position;
        assert!((0..=1280 - 400).contains(&position.x));
        assert!((0..=800 - TASKBAR_HEIGHT - 300).contains(&position.y));
    }
}

#[test]
fn minimize_then_restore_from_minimize_refocuses() {
    let mut stack = WindowStack::new(VIEWPORT);
    stack.open(id("a"), "A", Point::new(0, 0), Size::new(200, 200));
    stack.open(id("b"), "B", Point::new(0, 0), Size::new(200, 200));

    stack.minimize(&id("a"));
    assert!(stack.restore_from_minimize(&id("a")));

    assert!(!stack.get(&id("a")).expect("open").is_minimized);
    assert_eq!(stack.active_window_id(), Some(&id("a")));
}

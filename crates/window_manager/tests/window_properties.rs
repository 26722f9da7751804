use std::{cell::Cell, rc::Rc};

use pretty_assertions::assert_eq;
use window_manager::{
    CloseHandler, Coordinates, Dimensions, GlobalPointerEvent, ResizeDirection, Viewport,
    WindowAction, WindowGeometry, WindowId, WindowInstance, WindowRegistry, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};

const DESKTOP: Viewport = Viewport {
    width: 1920.0,
    height: 1080.0,
};

fn id(value: &str) -> WindowId {
    WindowId::from(value)
}

fn max_stack_order(registry: &WindowRegistry) -> u32 {
    registry
        .windows()
        .iter()
        .map(|record| record.stack_order)
        .max()
        .expect("at least one window")
}

#[test]
fn stacking_orders_strictly_increase_and_latest_is_on_top() {
    let mut registry = WindowRegistry::default();
    let mut issued = Vec::new();

    issued.push(registry.register(id("a"), None, None));
    issued.push(registry.register(id("b"), None, None));
    issued.push(registry.register(id("c"), None, None));

    let steps = [
        WindowAction::Focus(id("a")),
        WindowAction::Maximize(id("b")),
        WindowAction::Minimize(id("c")),
        WindowAction::Restore(id("c")),
        WindowAction::Focus(id("b")),
        WindowAction::Maximize(id("a")),
    ];
    for step in steps {
        let target = match &step {
            WindowAction::Focus(id)
            | WindowAction::Minimize(id)
            | WindowAction::Restore(id)
            | WindowAction::Maximize(id)
            | WindowAction::ToggleMinimize(id) => id.clone(),
        };
        let raises = !matches!(step, WindowAction::Minimize(_));
        registry.apply(step);
        if raises {
            let order = registry.z_index(&target);
            issued.push(order);
            assert_eq!(order, max_stack_order(&registry));
        }
    }

    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]), "{issued:?}");
}

#[test]
fn minimize_clears_focus() {
    let mut registry = WindowRegistry::default();
    registry.register(id("a"), None, None);

    assert!(registry.minimize(&id("a")));

    assert_eq!(registry.focused_id(), None);
    assert!(registry.is_minimized(&id("a")));
    assert_eq!(registry.minimized_windows().len(), 1);
}

#[test]
fn unregister_twice_matches_unregister_once() {
    let mut once = WindowRegistry::default();
    let mut twice = WindowRegistry::default();
    for registry in [&mut once, &mut twice] {
        registry.register(id("a"), None, None);
        registry.register(id("b"), None, None);
    }

    once.unregister(&id("b"));
    twice.unregister(&id("b"));
    assert!(twice.unregister(&id("b")).is_none());

    assert_eq!(once.windows(), twice.windows());
    assert_eq!(once.focused_id(), twice.focused_id());
    assert_eq!(twice.focused_id(), None);
}

#[test]
fn dragging_far_outside_viewport_clamps_to_edges() {
    let mut window = WindowInstance::new(WindowGeometry::new(
        Coordinates::new(200.0, 200.0),
        Dimensions::new(600.0, 500.0),
    ));
    window.begin_drag(Coordinates::new(220.0, 210.0), false);

    window.handle_pointer(
        GlobalPointerEvent::Move(Coordinates::new(-500.0, -500.0)),
        DESKTOP,
    );
    assert_eq!(window.geometry().position, Coordinates::new(0.0, 0.0));

    window.handle_pointer(
        GlobalPointerEvent::Move(Coordinates::new(100_000.0, 100_000.0)),
        DESKTOP,
    );
    assert_eq!(window.geometry().position, Coordinates::new(1320.0, 580.0));
}

#[test]
fn top_left_resize_preserves_bottom_right_anchor() {
    let mut window = WindowInstance::new(WindowGeometry::new(
        Coordinates::new(100.0, 100.0),
        Dimensions::new(400.0, 300.0),
    ));
    window.begin_resize(ResizeDirection::TopLeft, false);

    window.handle_pointer(
        GlobalPointerEvent::Move(Coordinates::new(150.0, 150.0)),
        DESKTOP,
    );

    let geometry = window.geometry();
    assert_eq!(geometry.position, Coordinates::new(150.0, 150.0));
    assert_eq!(geometry.size, Dimensions::new(350.0, 250.0));
    assert_eq!((geometry.right(), geometry.bottom()), (500.0, 400.0));
}

#[test]
fn shrinking_through_any_handle_stops_at_minimum_size() {
    for direction in ResizeDirection::ALL {
        let mut window = WindowInstance::new(WindowGeometry::new(
            Coordinates::new(500.0, 400.0),
            Dimensions::new(400.0, 300.0),
        ));
        window.begin_resize(direction, false);

        // Drive the pointer well past the opposite edge.
        let pointer = Coordinates::new(
            if direction.moves_left_edge() { 1800.0 } else { 0.0 },
            if direction.moves_top_edge() { 1000.0 } else { 0.0 },
        );
        window.handle_pointer(GlobalPointerEvent::Move(pointer), DESKTOP);

        let size = window.geometry().size;
        if direction.moves_left_edge() || direction.moves_right_edge() {
            assert_eq!(size.width, MIN_WINDOW_WIDTH, "{direction:?}");
        }
        if direction.moves_top_edge() || direction.moves_bottom_edge() {
            assert_eq!(size.height, MIN_WINDOW_HEIGHT, "{direction:?}");
        }
    }
}

#[test]
fn windows_straddling_the_origin_never_resize_below_minimum() {
    let narrow = Viewport::new(250.0, 180.0);
    for direction in ResizeDirection::ALL {
        let mut window = WindowInstance::new(WindowGeometry::new(
            Coordinates::new(-100.0, -60.0),
            Dimensions::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        ));
        window.begin_resize(direction, false);

        for pointer in [
            Coordinates::new(50.0, 40.0),
            Coordinates::new(-400.0, -400.0),
            Coordinates::new(900.0, 900.0),
        ] {
            window.handle_pointer(GlobalPointerEvent::Move(pointer), narrow);
            let geometry = window.geometry();
            assert!(geometry.size.width >= MIN_WINDOW_WIDTH, "{direction:?} {pointer:?}");
            assert!(geometry.size.height >= MIN_WINDOW_HEIGHT, "{direction:?} {pointer:?}");
        }
    }
}

#[test]
fn close_invokes_callback_exactly_once() {
    let mut registry = WindowRegistry::default();
    let calls = Rc::new(Cell::new(0_u32));
    let on_close: CloseHandler = {
        let calls = calls.clone();
        Rc::new(move || calls.set(calls.get() + 1))
    };
    registry.register(id("editor"), Some("Text Editor".into()), Some(on_close));

    assert!(registry.close(&id("editor")));
    assert!(!registry.close(&id("editor")));

    assert_eq!(calls.get(), 1);
    assert!(!registry.contains(&id("editor")));
}

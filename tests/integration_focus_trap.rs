use chat_screen::dom::{Element, ElementId, ElementTree};
use chat_screen::event::SurfaceEvent;
use chat_screen::{Screen, ScreenCallbacks, ScreenConfig, WindowState};
use crossterm::event::{KeyCode, KeyModifiers};

struct NoHost;

impl ScreenCallbacks for NoHost {
    fn on_minimize(&mut self) {
        panic!("tab must never request a transition");
    }

    fn on_restore(&mut self) {
        panic!("tab must never request a transition");
    }
}

fn surface(labels: &[&str]) -> (Screen, ElementTree, Vec<ElementId>) {
    let mut tree = ElementTree::new();
    let root = tree.insert_root(Element::container());
    let body = tree.append(root, Element::container()).unwrap();
    tree.append(body, Element::text("Welcome")).unwrap();
    let ids = labels
        .iter()
        .map(|label| tree.append(body, Element::button(*label)).unwrap())
        .collect();
    let mut screen = Screen::new(ScreenConfig::default(), WindowState::new());
    screen.handle_screen_ref(Some(root)).unwrap();
    (screen, tree, ids)
}

fn tab(shift: bool) -> SurfaceEvent {
    if shift {
        SurfaceEvent::key(KeyCode::BackTab, KeyModifiers::NONE)
    } else {
        SurfaceEvent::key(KeyCode::Tab, KeyModifiers::NONE)
    }
}

fn press(screen: &Screen, tree: &mut ElementTree, shift: bool) -> SurfaceEvent {
    let mut ev = tab(shift);
    let request = screen.handle_key_down(tree, &mut ev, &mut NoHost);
    assert!(request.is_none());
    assert!(ev.propagation_stopped());
    ev
}

#[test]
fn forward_tab_on_last_wraps_to_first() {
    let (screen, mut tree, ids) = surface(&["A", "B", "C"]);
    tree.focus(ids[2]);
    let ev = press(&screen, &mut tree, false);
    assert!(ev.default_prevented());
    assert_eq!(tree.active_element(), Some(ids[0]));
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    let (screen, mut tree, ids) = surface(&["A", "B", "C"]);
    tree.focus(ids[0]);
    let ev = press(&screen, &mut tree, true);
    assert!(ev.default_prevented());
    assert_eq!(tree.active_element(), Some(ids[2]));
}

#[test]
fn middle_element_uses_native_order() {
    let (screen, mut tree, ids) = surface(&["A", "B", "C"]);
    for shift in [false, true] {
        tree.focus(ids[1]);
        let ev = press(&screen, &mut tree, shift);
        assert!(!ev.default_prevented());
        assert_eq!(tree.active_element(), Some(ids[1]));
    }
}

#[test]
fn single_element_is_pinned_both_ways() {
    let (screen, mut tree, ids) = surface(&["A"]);
    for shift in [false, true] {
        tree.focus(ids[0]);
        let ev = press(&screen, &mut tree, shift);
        assert!(ev.default_prevented());
        assert_eq!(tree.active_element(), Some(ids[0]));
    }
}

#[test]
fn empty_surface_is_a_noop() {
    let (screen, mut tree, _) = surface(&[]);
    for shift in [false, true] {
        let ev = press(&screen, &mut tree, shift);
        assert!(!ev.default_prevented());
        assert_eq!(tree.active_element(), None);
    }
}

#[test]
fn raw_shift_tab_counts_as_backward() {
    let (screen, mut tree, ids) = surface(&["A", "B"]);
    tree.focus(ids[0]);
    let mut ev = SurfaceEvent::key(KeyCode::Tab, KeyModifiers::SHIFT);
    screen.handle_key_down(&mut tree, &mut ev, &mut NoHost);
    assert!(ev.default_prevented());
    assert_eq!(tree.active_element(), Some(ids[1]));
}

#[test]
fn content_added_after_mount_joins_the_ring() {
    let (screen, mut tree, ids) = surface(&["A", "B"]);
    let root = screen.surface_root().unwrap();
    let late = tree.append(root, Element::button("Late")).unwrap();
    tree.focus(ids[1]);
    // B is no longer last, so native order applies
    let ev = press(&screen, &mut tree, false);
    assert!(!ev.default_prevented());
    tree.focus(late);
    let ev = press(&screen, &mut tree, false);
    assert!(ev.default_prevented());
    assert_eq!(tree.active_element(), Some(ids[0]));
}

use chat_screen::dom::{Element, ElementId, ElementTree};
use chat_screen::event::SurfaceEvent;
use chat_screen::key_router::TransitionRequest;
use chat_screen::{Screen, ScreenCallbacks, ScreenConfig, ScreenMode, WindowState};
use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Default)]
struct Counter {
    minimize: usize,
    restore: usize,
}

impl ScreenCallbacks for Counter {
    fn on_minimize(&mut self) {
        self.minimize += 1;
    }

    fn on_restore(&mut self) {
        self.restore += 1;
    }
}

struct Fixture {
    tree: ElementTree,
    screen: Screen,
    a: ElementId,
    b: ElementId,
    anchor: ElementId,
}

fn fixture(state: WindowState) -> Fixture {
    let mut tree = ElementTree::new();
    let root = tree.insert_root(Element::container());
    let inner = tree.append(root, Element::container()).unwrap();
    let a = tree.append(inner, Element::button("A")).unwrap();
    let b = tree.append(inner, Element::text_area("B")).unwrap();
    let anchor = tree.append(root, Element::button("Chat")).unwrap();
    let mut screen = Screen::new(ScreenConfig::default(), state);
    screen.handle_screen_ref(Some(root)).unwrap();
    screen.handle_button_ref(Some(anchor)).unwrap();
    Fixture {
        tree,
        screen,
        a,
        b,
        anchor,
    }
}

#[test]
fn minimized_ignores_tab_and_escape() {
    for state in WindowState::all().filter(|s| s.minimized()) {
        let mut f = fixture(state);
        f.tree.focus(f.b);
        let mut host = Counter::default();
        for code in [KeyCode::Tab, KeyCode::BackTab, KeyCode::Esc] {
            let mut ev = SurfaceEvent::key(code, KeyModifiers::NONE);
            let request = f.screen.handle_key_down(&mut f.tree, &mut ev, &mut host);
            assert_eq!(request, None, "{state:?} {code:?}");
            assert!(ev.propagation_stopped());
            assert!(!ev.default_prevented());
        }
        assert_eq!(f.tree.active_element(), Some(f.b), "{state:?}");
        assert_eq!(host.minimize + host.restore, 0);
    }
}

#[test]
fn escape_minimizes_exactly_once_when_trapped() {
    for state in WindowState::all().filter(|s| !s.minimized() && !s.windowed()) {
        let mut f = fixture(state);
        assert_eq!(f.screen.mode(), ScreenMode::OpenTrapped);
        let mut host = Counter::default();
        let mut ev = SurfaceEvent::key(KeyCode::Esc, KeyModifiers::NONE);
        let request = f.screen.handle_key_down(&mut f.tree, &mut ev, &mut host);
        assert_eq!(request, Some(TransitionRequest::Minimize));
        assert_eq!(host.minimize, 1, "{state:?}");
        assert_eq!(host.restore, 0);
    }
}

#[test]
fn escape_never_minimizes_when_windowed() {
    for state in WindowState::all().filter(|s| s.windowed()) {
        let mut f = fixture(state);
        let mut host = Counter::default();
        let mut ev = SurfaceEvent::key(KeyCode::Esc, KeyModifiers::NONE);
        f.screen.handle_key_down(&mut f.tree, &mut ev, &mut host);
        assert_eq!(host.minimize, 0, "{state:?}");
        assert!(ev.propagation_stopped());
    }
}

#[test]
fn restore_focuses_first_element() {
    let mut f = fixture(WindowState::new().with_minimized(true));
    f.tree.focus(f.anchor);
    let mut host = Counter::default();
    f.screen.handle_on_restore(&mut f.tree, &mut host);
    assert_eq!(host.restore, 1);
    // focus moved before the host re-rendered
    assert_eq!(f.tree.active_element(), Some(f.a));
    f.screen.commit(&mut f.tree, WindowState::new());
    assert_eq!(f.tree.active_element(), Some(f.a));
}

#[test]
fn restore_through_props_alone_refocuses_on_commit() {
    let mut f = fixture(WindowState::new().with_minimized(true));
    f.tree.focus(f.anchor);
    f.screen.commit(&mut f.tree, WindowState::new());
    assert_eq!(f.tree.active_element(), Some(f.a));
}

#[test]
fn minimize_focuses_anchor() {
    let mut f = fixture(WindowState::new());
    f.tree.focus(f.b);
    let mut host = Counter::default();
    f.screen.handle_on_minimize(&mut f.tree, &mut host);
    assert_eq!(host.minimize, 1);
    assert_eq!(f.tree.active_element(), Some(f.anchor));
    // committing the minimized state leaves focus alone
    f.screen
        .commit(&mut f.tree, WindowState::new().with_minimized(true));
    assert_eq!(f.tree.active_element(), Some(f.anchor));
}

#[test]
fn minimize_before_anchor_mounts_leaves_focus() {
    let mut f = fixture(WindowState::new());
    f.screen.handle_button_ref(None).unwrap();
    f.tree.focus(f.b);
    let mut host = Counter::default();
    f.screen.handle_on_minimize(&mut f.tree, &mut host);
    assert_eq!(host.minimize, 1);
    assert_eq!(f.tree.active_element(), Some(f.b));
}

#[test]
fn dialog_attributes_track_visibility() {
    let mut f = fixture(WindowState::new().with_minimized(true));
    assert!(f.screen.dialog_attributes().is_none());
    f.screen.commit(&mut f.tree, WindowState::new());
    let attrs = f.screen.dialog_attributes().unwrap();
    assert_eq!(
        attrs.pairs(),
        [
            ("role", "dialog"),
            ("aria-modal", "true"),
            ("aria-labelledby", "header__title-id"),
        ]
    );
}

//! Drawer Widget - Sliding panel anchored to one edge.
//!
//! A drawer is a toggle-style host: the controller flips `open` and the
//! drawer sequences its own mount and visibility flags around that, so a
//! slide transition never starts on a node that is not in the tree yet.
//!
//! Opening mounts immediately and turns visibility on after the
//! configured transition window. Closing turns visibility off
//! immediately, fires `on_close`, and unmounts after the transition plus
//! a fixed buffer. Both deferred flips run through the timer queue and
//! check the instance's cancellation token first, so a drawer torn down
//! mid-transition never mutates dead state.
//!
//! Inline drawers are permanent furniture: always mounted, never
//! animated, open toggles are ignored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::engine::{arrange, Injectors, SlotDeclarations};
use crate::error::Result;
use crate::node::{Handler, Node, Props};
use crate::state::keyboard;
use crate::state::timers::{self, CancelToken, TimerId};
use crate::types::{DrawerKind, Orientation, TypeTag};

use super::Teardown;

/// Extra wait after the close transition before unmounting, so the
/// slide finishes on screen before the node disappears.
const UNMOUNT_BUFFER_MS: u64 = 100;

// =============================================================================
// Props
// =============================================================================

/// Configuration for [`Drawer`].
#[derive(Debug, Clone)]
pub struct DrawerProps {
    /// Overlay, Push, or Inline behavior.
    pub kind: DrawerKind,
    /// Anchor edge. Top and bottom slide the height extent, left and
    /// right the width extent.
    pub orientation: Orientation,
    /// Initial controlled state.
    pub open: bool,
    /// Transition window in milliseconds.
    pub transition: u64,
    /// Size of the sliding extent.
    pub dimension: i64,
    /// Fired when open goes from true to false.
    pub on_close: Option<Handler>,
    /// The controller's toggle, invoked by Escape and backdrop clicks.
    pub on_toggle: Option<Handler>,
    /// Author style, wins over the computed anchor and extent keys.
    pub style: Props,
}

impl Default for DrawerProps {
    fn default() -> Self {
        Self {
            kind: DrawerKind::default(),
            orientation: Orientation::default(),
            open: false,
            transition: 300,
            dimension: 300,
            on_close: None,
            on_toggle: None,
            style: Props::new(),
        }
    }
}

// =============================================================================
// Drawer
// =============================================================================

/// Sliding panel host with two-phase open/close sequencing.
pub struct Drawer {
    props: DrawerProps,
    children: Vec<Node>,
    mounted: Rc<Cell<bool>>,
    visible: Rc<Cell<bool>>,
    open: Cell<bool>,
    pending: RefCell<Vec<TimerId>>,
    token: CancelToken,
    scope: RefCell<Option<Teardown>>,
}

impl Drawer {
    /// Create a drawer over the given children.
    ///
    /// A drawer constructed already open shows without a transition.
    pub fn new(props: DrawerProps, children: Vec<Node>) -> Self {
        let start = props.kind.always_mounted() || props.open;
        let drawer = Self {
            mounted: Rc::new(Cell::new(start)),
            visible: Rc::new(Cell::new(start)),
            open: Cell::new(props.open),
            pending: RefCell::new(Vec::new()),
            token: CancelToken::new(),
            scope: RefCell::new(None),
            props,
            children,
        };
        if drawer.open.get() && !drawer.props.kind.always_mounted() {
            drawer.register_scope();
        }
        drawer
    }

    /// Whether the drawer is in the tree.
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Whether the drawer is slid out to its full extent.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Apply a controlled open/close change.
    ///
    /// Opening mounts now and schedules visibility at `+transition`.
    /// Closing hides now, fires `on_close`, and schedules unmount at
    /// `+transition + buffer`. A toggle cancels whatever the previous
    /// toggle still had pending, so rapid flips cannot interleave.
    pub fn set_open(&self, open: bool) {
        if self.props.kind.always_mounted() {
            log::trace!("drawer: inline drawers ignore open toggles");
            return;
        }
        if open == self.open.get() {
            return;
        }
        self.open.set(open);
        self.cancel_pending();

        if open {
            log::debug!("drawer: opening, visible in {}ms", self.props.transition);
            self.mounted.set(true);

            let visible = Rc::clone(&self.visible);
            let token = self.token.clone();
            let id = timers::schedule(self.props.transition, move || {
                if !token.is_cancelled() {
                    visible.set(true);
                }
            });
            self.pending.borrow_mut().push(id);
            self.register_scope();
        } else {
            let delay = self.props.transition + UNMOUNT_BUFFER_MS;
            log::debug!("drawer: closing, unmount in {}ms", delay);
            self.visible.set(false);
            if let Some(ref on_close) = self.props.on_close {
                on_close.call();
            }

            let mounted = Rc::clone(&self.mounted);
            let token = self.token.clone();
            let id = timers::schedule(delay, move || {
                if !token.is_cancelled() {
                    mounted.set(false);
                }
            });
            self.pending.borrow_mut().push(id);
            self.drop_scope();
        }
    }

    /// Build the drawer tree for this pass, or `None` while unmounted.
    ///
    /// Fails on a second Header or Footer child; no partial tree is
    /// produced.
    pub fn render(&self) -> Result<Option<Node>> {
        if !self.mounted.get() && !self.props.kind.always_mounted() {
            return Ok(None);
        }

        let decls = SlotDeclarations::new()
            .single(TypeTag::Header)
            .single(TypeTag::Footer)
            .many(TypeTag::Option);
        let injectors = Injectors::new().on(TypeTag::Option, |node, _ctx| {
            node.with_defaults(&Props::new().with(
                "style",
                Props::new()
                    .with("height", "2rem")
                    .with("display", "flex")
                    .with("align_items", "center"),
            ))
        });
        let mut arrangement = arrange(&self.children, &decls, &injectors)?;

        let head = arrangement.singletons.take(TypeTag::Header).map(|node| {
            node.with_defaults(&Props::new().with("style", Props::new().with("margin_bottom", 10)))
        });
        let foot = arrangement.singletons.take(TypeTag::Footer).map(|node| {
            node.with_defaults(&Props::new().with("style", Props::new().with("margin_top", 10)))
        });

        let mut panel = Node::new(TypeTag::View).prop("style", self.panel_style());
        if let Some(head) = head {
            panel = panel.child(head);
        }
        panel = panel.child(Node::new(TypeTag::View).append(arrangement.sequence));
        if let Some(foot) = foot {
            panel = panel.child(foot);
        }

        let mut root = Node::new(TypeTag::Drawer)
            .prop("kind", self.props.kind.as_str())
            .prop("orientation", self.props.orientation.as_str())
            .prop("style", self.container_style())
            .child(panel);

        if self.props.kind.has_backdrop() {
            root = root.child(self.backdrop());
        }

        Ok(Some(root))
    }

    /// Anchor edge pinned to zero, extent collapsed while hidden,
    /// author style last.
    fn container_style(&self) -> Props {
        let extent = self.props.orientation.slide_dimension();
        let extended = self.props.kind.always_mounted() || self.visible.get();

        let mut computed = Props::new();
        computed.set(self.props.orientation.as_str(), 0i64);
        computed.set(extent, if extended { self.props.dimension } else { 0 });
        computed.set(
            "transition",
            format!("{} {}ms", extent, self.props.transition),
        );
        Props::layered(&[&computed, &self.props.style])
    }

    /// The panel keeps its full extent so content lays out at final
    /// size while the container clips it during the slide.
    fn panel_style(&self) -> Props {
        let extent = self.props.orientation.slide_dimension();
        let computed = Props::new().with(extent, self.props.dimension);
        Props::layered(&[&computed, &self.props.style])
    }

    /// Backdrop fades with visibility and forwards clicks to the toggle.
    fn backdrop(&self) -> Node {
        let mut node = Node::new(TypeTag::View)
            .prop("backdrop", true)
            .style("opacity", if self.visible.get() { 1i64 } else { 0 });
        if let Some(ref toggle) = self.props.on_toggle {
            node = node.prop("on_click", toggle.clone());
        }
        node
    }

    fn register_scope(&self) {
        if self.scope.borrow().is_some() {
            return;
        }
        let on_toggle = self.props.on_toggle.clone();
        let cleanup = keyboard::on_scope(move |event| {
            if event.key == "Escape" {
                match on_toggle {
                    Some(ref toggle) => {
                        toggle.call();
                        true
                    }
                    None => false,
                }
            } else {
                false
            }
        });
        *self.scope.borrow_mut() = Some(Box::new(cleanup));
    }

    fn drop_scope(&self) {
        if let Some(cleanup) = self.scope.borrow_mut().take() {
            cleanup();
        }
    }

    fn cancel_pending(&self) {
        for id in self.pending.borrow_mut().drain(..) {
            timers::cancel(id);
        }
    }

    /// Tear the instance down: cancel the token and pending timers,
    /// release the keyboard scope. Terminal and idempotent.
    pub fn teardown(&self) {
        self.token.cancel();
        self.cancel_pending();
        self.drop_scope();
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::PropValue;
    use crate::state::keyboard::KeyEvent;
    use crate::widgets::{footer, header, option, text};

    fn setup() {
        timers::reset_timer_state();
        keyboard::reset_keyboard_state();
    }

    fn overlay(open: bool) -> Drawer {
        Drawer::new(
            DrawerProps {
                open,
                ..Default::default()
            },
            vec![option("Copy"), text("loose")],
        )
    }

    #[test]
    fn test_open_mounts_now_visible_after_transition() {
        setup();

        let drawer = overlay(false);
        assert!(!drawer.is_mounted());

        drawer.set_open(true);
        assert!(drawer.is_mounted());
        assert!(!drawer.is_visible());

        timers::advance(299);
        assert!(!drawer.is_visible());
        timers::advance(1);
        assert!(drawer.is_visible());
    }

    #[test]
    fn test_close_hides_now_unmounts_after_buffer() {
        setup();

        let closes = Rc::new(Cell::new(0));
        let closes_cb = closes.clone();
        let drawer = Drawer::new(
            DrawerProps {
                open: true,
                on_close: Some(Handler::new(move || closes_cb.set(closes_cb.get() + 1))),
                ..Default::default()
            },
            vec![option("Copy")],
        );

        drawer.set_open(false);
        assert!(!drawer.is_visible());
        assert!(drawer.is_mounted());
        assert_eq!(closes.get(), 1);

        // transition 300 + buffer 100
        timers::advance(399);
        assert!(drawer.is_mounted());
        timers::advance(1);
        assert!(!drawer.is_mounted());
    }

    #[test]
    fn test_teardown_mid_delay_applies_nothing() {
        setup();

        let drawer = overlay(false);
        drawer.set_open(true);

        drawer.teardown();
        timers::advance(1000);
        assert!(!drawer.is_visible());
        assert_eq!(timers::pending(), 0);
    }

    #[test]
    fn test_drop_cancels_pending_transition() {
        setup();

        {
            let drawer = overlay(true);
            drawer.set_open(false);
            assert_eq!(timers::pending(), 1);
        }
        assert_eq!(timers::pending(), 0);
    }

    #[test]
    fn test_reopen_mid_close_keeps_drawer_mounted() {
        setup();

        let drawer = overlay(true);
        drawer.set_open(false);
        timers::advance(50);

        drawer.set_open(true);
        timers::advance(1000);
        assert!(drawer.is_mounted());
        assert!(drawer.is_visible());
    }

    #[test]
    fn test_redundant_toggle_is_ignored() {
        setup();

        let drawer = overlay(false);
        drawer.set_open(true);
        drawer.set_open(true);
        assert_eq!(timers::pending(), 1);
    }

    #[test]
    fn test_unmounted_drawer_renders_nothing() {
        setup();

        let drawer = overlay(false);
        assert_eq!(drawer.render().unwrap(), None);
    }

    #[test]
    fn test_inline_always_mounted_ignores_toggles() {
        setup();

        let drawer = Drawer::new(
            DrawerProps {
                kind: DrawerKind::Inline,
                ..Default::default()
            },
            vec![option("Copy")],
        );
        assert!(drawer.is_mounted());

        drawer.set_open(true);
        assert_eq!(timers::pending(), 0);

        let root = drawer.render().unwrap().unwrap();
        // Full extent despite never being toggled open, and no backdrop.
        assert_eq!(
            root.style_map().unwrap().get("width").unwrap().as_int(),
            Some(300)
        );
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_backdrop_only_on_overlay() {
        setup();

        let toggles = Rc::new(Cell::new(0));
        let toggles_cb = toggles.clone();
        let drawer = Drawer::new(
            DrawerProps {
                open: true,
                on_toggle: Some(Handler::new(move || toggles_cb.set(toggles_cb.get() + 1))),
                ..Default::default()
            },
            vec![option("Copy")],
        );

        let root = drawer.render().unwrap().unwrap();
        assert_eq!(root.children.len(), 2);

        let backdrop = &root.children[1];
        assert_eq!(backdrop.get("backdrop").unwrap().as_bool(), Some(true));
        assert_eq!(
            backdrop.style_map().unwrap().get("opacity").unwrap().as_int(),
            Some(1)
        );
        backdrop
            .get("on_click")
            .and_then(PropValue::as_handler)
            .unwrap()
            .call();
        assert_eq!(toggles.get(), 1);

        let push = Drawer::new(
            DrawerProps {
                kind: DrawerKind::Push,
                open: true,
                ..Default::default()
            },
            vec![option("Copy")],
        );
        let root = push.render().unwrap().unwrap();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_container_collapses_extent_while_hidden() {
        setup();

        let drawer = overlay(false);
        drawer.set_open(true);

        // Mounted but not yet visible: extent is zero, ready to slide.
        let root = drawer.render().unwrap().unwrap();
        let style = root.style_map().unwrap();
        assert_eq!(style.get("left").unwrap().as_int(), Some(0));
        assert_eq!(style.get("width").unwrap().as_int(), Some(0));
        assert_eq!(
            style.get("transition").unwrap().as_str(),
            Some("width 300ms")
        );

        timers::advance(300);
        let root = drawer.render().unwrap().unwrap();
        assert_eq!(
            root.style_map().unwrap().get("width").unwrap().as_int(),
            Some(300)
        );
    }

    #[test]
    fn test_top_orientation_slides_height() {
        setup();

        let drawer = Drawer::new(
            DrawerProps {
                orientation: Orientation::Top,
                open: true,
                ..Default::default()
            },
            vec![],
        );

        let root = drawer.render().unwrap().unwrap();
        let style = root.style_map().unwrap();
        assert_eq!(style.get("top").unwrap().as_int(), Some(0));
        assert_eq!(style.get("height").unwrap().as_int(), Some(300));
        assert!(style.get("width").is_none());
    }

    #[test]
    fn test_author_style_wins_over_computed_keys() {
        setup();

        let drawer = Drawer::new(
            DrawerProps {
                open: true,
                style: Props::new().with("width", 150i64),
                ..Default::default()
            },
            vec![],
        );

        let root = drawer.render().unwrap().unwrap();
        assert_eq!(
            root.style_map().unwrap().get("width").unwrap().as_int(),
            Some(150)
        );
    }

    #[test]
    fn test_header_footer_gap_patches() {
        setup();

        let drawer = Drawer::new(
            DrawerProps {
                open: true,
                ..Default::default()
            },
            vec![
                footer([text("fine print")]),
                option("Copy"),
                header([text("title")]).style("margin_bottom", 24i64),
            ],
        );

        let root = drawer.render().unwrap().unwrap();
        let panel = &root.children[0];
        assert_eq!(panel.children[0].tag, TypeTag::Header);
        assert_eq!(panel.children[1].tag, TypeTag::View);
        assert_eq!(panel.children[2].tag, TypeTag::Footer);

        // Author's own gap wins over the computed patch.
        let head_style = panel.children[0].style_map().unwrap();
        assert_eq!(head_style.get("margin_bottom").unwrap().as_int(), Some(24));

        let foot_style = panel.children[2].style_map().unwrap();
        assert_eq!(foot_style.get("margin_top").unwrap().as_int(), Some(10));
    }

    #[test]
    fn test_options_get_row_style_patch() {
        setup();

        let drawer = Drawer::new(
            DrawerProps {
                open: true,
                ..Default::default()
            },
            vec![option("Copy").style("height", "3rem"), option("Paste")],
        );

        let root = drawer.render().unwrap().unwrap();
        let body = &root.children[0].children[0];

        let first = body.children[0].style_map().unwrap();
        assert_eq!(first.get("height").unwrap().as_str(), Some("3rem"));
        assert_eq!(first.get("display").unwrap().as_str(), Some("flex"));

        let second = body.children[1].style_map().unwrap();
        assert_eq!(second.get("height").unwrap().as_str(), Some("2rem"));
        assert_eq!(second.get("align_items").unwrap().as_str(), Some("center"));
    }

    #[test]
    fn test_second_header_fails_render() {
        setup();

        let drawer = Drawer::new(
            DrawerProps {
                open: true,
                ..Default::default()
            },
            vec![header([]), header([])],
        );

        assert!(drawer.render().is_err());
    }

    #[test]
    fn test_escape_toggles_while_open_only() {
        setup();

        let toggles = Rc::new(Cell::new(0));
        let toggles_cb = toggles.clone();
        let drawer = Drawer::new(
            DrawerProps {
                on_toggle: Some(Handler::new(move || toggles_cb.set(toggles_cb.get() + 1))),
                ..Default::default()
            },
            vec![option("Copy")],
        );

        // Closed: no scope.
        assert!(!keyboard::dispatch(KeyEvent::new("Escape")));

        drawer.set_open(true);
        assert!(keyboard::dispatch(KeyEvent::new("Escape")));
        assert_eq!(toggles.get(), 1);

        drawer.set_open(false);
        assert!(!keyboard::dispatch(KeyEvent::new("Escape")));
        assert_eq!(toggles.get(), 1);
    }
}

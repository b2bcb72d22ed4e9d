use super::render::RenderHandle;
use crate::error::HookError;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A leaf of the UI tree.
///
/// Components acquire their hooks when they are built (see
/// [`Host::mount`]) and release them when dropped, so unmounting a
/// component is simply dropping it.
pub trait Component: 'static {
    /// Name used in logs.
    const NAME: &'static str;

    /// Produce the component's current view.
    fn render(&self) -> String;
}

/// Identity of a mounted component within its [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

struct MountedNode<C> {
    component: C,
    handle: RenderHandle,
    renders: Cell<u64>,
    view: RefCell<String>,
}

trait AnyNode {
    fn handle(&self) -> &RenderHandle;
    fn render_now(&self);
    fn view(&self) -> String;
}

impl<C: Component> AnyNode for MountedNode<C> {
    fn handle(&self) -> &RenderHandle {
        &self.handle
    }

    fn render_now(&self) {
        let view = self.component.render();
        self.renders.set(self.renders.get() + 1);
        tracing::debug!(component = C::NAME, %view, "render");
        *self.view.borrow_mut() = view;
    }

    fn view(&self) -> String {
        self.view.borrow().clone()
    }
}

/// Owns mounted components and re-renders the ones that asked for it.
#[derive(Default)]
pub struct Host {
    next_id: u64,
    nodes: Vec<(MountId, Rc<dyn AnyNode>)>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a component and render it once.
    ///
    /// `build` runs in the caller's context, so hooks that read provided
    /// values must be called inside the matching provider scope.
    pub fn mount<C, F>(&mut self, build: F) -> Result<ComponentRef<C>, HookError>
    where
        C: Component,
        F: FnOnce(&RenderHandle) -> Result<C, HookError>,
    {
        let handle = RenderHandle::new(C::NAME);
        let component = build(&handle)?;

        let id = MountId(self.next_id);
        self.next_id += 1;

        let node = Rc::new(MountedNode {
            component,
            handle,
            renders: Cell::new(0),
            view: RefCell::new(String::new()),
        });
        node.render_now();
        tracing::info!(component = C::NAME, id = id.0, "mounted");

        let weak = Rc::downgrade(&node);
        let node: Rc<dyn AnyNode> = node;
        self.nodes.push((id, node));
        Ok(ComponentRef { id, node: weak })
    }

    /// Re-render every dirty component, in mount order.
    ///
    /// Returns how many components rendered.
    pub fn flush(&self) -> usize {
        let mut rendered = 0;
        for (_, node) in &self.nodes {
            if node.handle().take_dirty() {
                node.render_now();
                rendered += 1;
            }
        }
        rendered
    }

    /// Render a component regardless of its dirty flag.
    pub fn force_render(&self, id: MountId) -> bool {
        match self.nodes.iter().find(|(node_id, _)| *node_id == id) {
            Some((_, node)) => {
                node.handle().take_dirty();
                node.render_now();
                true
            }
            None => false,
        }
    }

    /// Last rendered view of every mounted component, in mount order.
    pub fn views(&self) -> Vec<String> {
        self.nodes.iter().map(|(_, node)| node.view()).collect()
    }

    /// Drop one component and release its hooks.
    pub fn unmount(&mut self, id: MountId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|(node_id, _)| *node_id != id);
        let removed = self.nodes.len() != before;
        if removed {
            tracing::info!(id = id.0, "unmounted");
        }
        removed
    }

    pub fn unmount_all(&mut self) {
        let count = self.nodes.len();
        self.nodes.clear();
        tracing::info!(count, "unmounted all components");
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Non-owning handle to a mounted component.
///
/// Every accessor returns `None` once the component has been unmounted.
pub struct ComponentRef<C> {
    id: MountId,
    node: Weak<MountedNode<C>>,
}

impl<C: Component> ComponentRef<C> {
    pub fn id(&self) -> MountId {
        self.id
    }

    pub fn is_mounted(&self) -> bool {
        self.node.strong_count() > 0
    }

    /// Run `f` against the mounted component.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.node.upgrade().map(|node| f(&node.component))
    }

    /// Number of times the component has rendered, including the mount.
    pub fn render_count(&self) -> Option<u64> {
        self.node.upgrade().map(|node| node.renders.get())
    }

    pub fn view(&self) -> Option<String> {
        self.node.upgrade().map(|node| node.view())
    }
}

impl<C> Clone for ComponentRef<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            node: Weak::clone(&self.node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label {
        text: Rc<RefCell<String>>,
    }

    impl Component for Label {
        const NAME: &'static str = "label";

        fn render(&self) -> String {
            self.text.borrow().clone()
        }
    }

    fn mount_label(
        host: &mut Host,
        text: &str,
    ) -> (ComponentRef<Label>, Rc<RefCell<String>>, RenderHandle) {
        let shared = Rc::new(RefCell::new(text.to_string()));
        let mut captured = None;
        let component = host
            .mount(|handle| {
                captured = Some(handle.clone());
                Ok(Label {
                    text: Rc::clone(&shared),
                })
            })
            .unwrap();
        (component, shared, captured.unwrap())
    }

    #[test]
    fn mount_renders_once() {
        let mut host = Host::new();
        let (label, _, _) = mount_label(&mut host, "hello");

        assert_eq!(label.render_count(), Some(1));
        assert_eq!(host.views(), vec!["hello".to_string()]);
    }

    #[test]
    fn flush_renders_only_dirty_components() {
        let mut host = Host::new();
        let (first, text, handle) = mount_label(&mut host, "a");
        let (second, _, _) = mount_label(&mut host, "b");

        *text.borrow_mut() = "a2".to_string();
        handle.request();
        handle.request();

        assert_eq!(host.flush(), 1);
        assert_eq!(host.flush(), 0);
        assert_eq!(first.render_count(), Some(2));
        assert_eq!(second.render_count(), Some(1));
        assert_eq!(first.view().as_deref(), Some("a2"));
    }

    #[test]
    fn unmount_invalidates_refs() {
        let mut host = Host::new();
        let (label, _, _) = mount_label(&mut host, "x");

        assert!(host.unmount(label.id()));
        assert!(!host.unmount(label.id()));
        assert!(!label.is_mounted());
        assert_eq!(label.with(|_| ()), None);
        assert!(host.is_empty());
    }

    #[test]
    fn failed_build_mounts_nothing() {
        let mut host = Host::new();
        let result = host.mount::<Label, _>(|_| {
            Err(HookError::MissingContext {
                type_name: "nothing",
            })
        });

        assert!(result.is_err());
        assert_eq!(host.len(), 0);
    }
}

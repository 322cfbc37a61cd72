//! Preview host with identity-keyed remounting.
//!
//! The host owns the rendered subtree. A changed remount token drops the old
//! subtree and mounts a new one; ordinary value updates re-render into the
//! mounted subtree so settled animations stay settled.

use std::fmt;

use crate::values::{RemountToken, ValueMap};

type Children<C> = Box<dyn Fn(&ValueMap) -> C + Send + Sync>;

/// Hosts caller-supplied preview content.
pub struct PreviewHost<C> {
    children: Children<C>,
    mounted: Option<Mounted<C>>,
    mounts: u64,
}

struct Mounted<C> {
    token: RemountToken,
    id: u64,
    content: C,
}

/// Result of one render pass.
#[derive(Debug)]
pub struct PreviewFrame<'a, C> {
    /// Token the subtree is keyed by
    pub token: RemountToken,
    /// Sequence number of the mounted subtree, starting at 1
    pub mount: u64,
    /// True when this pass created the subtree
    pub fresh: bool,
    pub content: &'a C,
}

impl<C> PreviewHost<C> {
    /// Create a host around a pure render function of the values.
    pub fn new(children: impl Fn(&ValueMap) -> C + Send + Sync + 'static) -> Self {
        Self {
            children: Box::new(children),
            mounted: None,
            mounts: 0,
        }
    }

    /// Render the preview for the given values and token.
    pub fn render(&mut self, values: &ValueMap, token: RemountToken) -> PreviewFrame<'_, C> {
        let content = (self.children)(values);

        // Taking the old subtree drops it unless the token still matches.
        let (mounted, fresh) = match self.mounted.take() {
            Some(mut mounted) if mounted.token == token => {
                mounted.content = content;
                (mounted, false)
            }
            _ => {
                self.mounts += 1;
                tracing::debug!(
                    mount = self.mounts,
                    remount = token.get(),
                    "mounting preview"
                );
                let mounted = Mounted {
                    token,
                    id: self.mounts,
                    content,
                };
                (mounted, true)
            }
        };

        let mounted = self.mounted.insert(mounted);
        PreviewFrame {
            token: mounted.token,
            mount: mounted.id,
            fresh,
            content: &mounted.content,
        }
    }

    /// The last rendered frame, if any.
    pub fn current(&self) -> Option<PreviewFrame<'_, C>> {
        self.mounted.as_ref().map(|mounted| PreviewFrame {
            token: mounted.token,
            mount: mounted.id,
            fresh: false,
            content: &mounted.content,
        })
    }

    /// Number of subtrees mounted so far.
    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    /// Drop the mounted subtree.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }
}

impl<C> fmt::Debug for PreviewHost<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHost")
            .field("mounted", &self.mounted.as_ref().map(|m| (m.token, m.id)))
            .field("mounts", &self.mounts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlDescriptor, ControlValue};
    use crate::state::Playground;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn playground() -> Playground {
        Playground::new(
            "Rotate",
            vec![
                ControlDescriptor::range("rotation", "Rotation", 360.0),
                ControlDescriptor::boolean("repeat", "Loop", false),
            ],
        )
        .unwrap()
    }

    fn describe(values: &ValueMap) -> String {
        format!(
            "rotate {} loop {}",
            values.get("rotation").cloned().unwrap_or_default(),
            values.get("repeat").cloned().unwrap_or_default()
        )
    }

    #[test]
    fn first_render_mounts() {
        let playground = playground();
        let mut host = PreviewHost::new(describe);

        let frame = host.render(playground.values(), playground.remount());

        assert!(frame.fresh);
        assert_eq!(frame.mount, 1);
        assert_eq!(frame.content, "rotate 360 loop false");
    }

    #[test]
    fn value_updates_keep_the_mounted_subtree() {
        let mut playground = playground();
        let mut host = PreviewHost::new(describe);
        host.render(playground.values(), playground.remount());

        playground.set_value("rotation", -90.0_f64).unwrap();
        let frame = host.render(playground.values(), playground.remount());

        assert!(!frame.fresh);
        assert_eq!(frame.mount, 1);
        assert_eq!(frame.content, "rotate -90 loop false");
        assert_eq!(host.mounts(), 1);
    }

    #[test]
    fn replay_remounts_with_current_values() {
        let mut playground = playground();
        let mut host = PreviewHost::new(describe);
        host.render(playground.values(), playground.remount());
        playground.set_value("repeat", true).unwrap();

        playground.replay();
        let frame = host.render(playground.values(), playground.remount());

        assert!(frame.fresh);
        assert_eq!(frame.mount, 2);
        assert_eq!(frame.content, "rotate 360 loop true");
    }

    #[test]
    fn reset_remounts_with_defaults() {
        let mut playground = playground();
        let mut host = PreviewHost::new(describe);
        playground.set_value("rotation", 15.0_f64).unwrap();
        host.render(playground.values(), playground.remount());

        playground.reset();
        let frame = host.render(playground.values(), playground.remount());

        assert!(frame.fresh);
        assert_eq!(frame.token.get(), 1);
        assert_eq!(frame.content, "rotate 360 loop false");
    }

    #[test]
    fn children_run_on_every_render() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut host = PreviewHost::new(move |_: &ValueMap| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut playground = playground();

        host.render(playground.values(), playground.remount());
        playground
            .set_value("rotation", ControlValue::Number(45.0))
            .unwrap();
        host.render(playground.values(), playground.remount());
        playground.replay();
        host.render(playground.values(), playground.remount());

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(host.mounts(), 2);
    }

    #[test]
    fn unmount_forces_a_fresh_mount() {
        let playground = playground();
        let mut host = PreviewHost::new(describe);
        host.render(playground.values(), playground.remount());

        host.unmount();
        assert!(host.current().is_none());

        let frame = host.render(playground.values(), playground.remount());
        assert!(frame.fresh);
        assert_eq!(frame.mount, 2);
    }
}

//! Sidebar shell context shared by the header, sidebar and menu components

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use navshell_core::{ListenerHost, NavTree, ScopedListener, ShellConfig, SidebarShell};
use wasm_bindgen::JsCast;

use crate::browser::{classify_pointer, viewport_width, BodyClassFlag, BrowserStorage};

pub type BrowserShell = SidebarShell<BrowserStorage, BodyClassFlag>;

/// Shell state plus the two elements outside-click detection needs
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub shell: RwSignal<BrowserShell>,
    /// The sidebar panel
    pub panel: NodeRef<html::Aside>,
    /// The hamburger button that opens the panel
    pub trigger: NodeRef<html::Button>,
}

impl SidebarContext {
    pub fn toggle_visibility(&self) {
        self.shell.update(|s| {
            s.toggle_visibility();
        });
    }

    pub fn toggle_expanded(&self) {
        self.shell.update(|s| {
            s.toggle_expanded();
        });
    }
}

/// Document click listener that feeds classified targets to the shell
struct DocumentClickHost {
    ctx: SidebarContext,
}

impl ListenerHost for DocumentClickHost {
    fn attach_dismissal(&self) -> ScopedListener {
        let SidebarContext {
            shell,
            panel,
            trigger,
        } = self.ctx;

        let handle = window_event_listener(ev::click, move |event| {
            let panel = panel
                .get_untracked()
                .map(|el| el.unchecked_into::<web_sys::Node>());
            let trigger = trigger
                .get_untracked()
                .map(|el| el.unchecked_into::<web_sys::Node>());

            if let Some(target) = classify_pointer(event.target(), panel, trigger) {
                if shell.with_untracked(|s| s.is_sidebar_open()) {
                    shell.update(|s| {
                        s.handle_pointer(target);
                    });
                }
            }
        });

        ScopedListener::new("click", move || handle.remove())
    }
}

/// Create the shell for the current route and provide it as context
pub fn provide_sidebar_context(config: ShellConfig) -> SidebarContext {
    let location = use_location();
    let path = location.pathname.get_untracked();

    let shell = SidebarShell::new(
        NavTree::dashboard(),
        BrowserStorage,
        BodyClassFlag,
        config,
        path,
    );

    let ctx = SidebarContext {
        shell: RwSignal::new(shell),
        panel: NodeRef::new(),
        trigger: NodeRef::new(),
    };
    provide_context(ctx);
    ctx
}

/// Wire the shell to the document for the lifetime of the calling component
///
/// Attaches the outside-click and resize listeners and follows route
/// changes. Both listeners are released in the component's cleanup.
pub fn mount_sidebar(ctx: SidebarContext) {
    let shell = ctx.shell;

    shell.update_untracked(|s| {
        s.mount(&DocumentClickHost { ctx });
    });

    if let Some(width) = viewport_width() {
        shell.update(|s| {
            s.resize(width);
        });
    }
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            shell.update(|s| {
                s.resize(width);
            });
        }
    });
    let resize = ScopedListener::new("resize", move || resize.remove());

    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        shell.update(|s| {
            s.navigate(path);
        });
    });

    on_cleanup(move || {
        resize.release();
        shell.try_update_untracked(|s| {
            s.unmount();
        });
    });
}

/// Hook to access the sidebar context
pub fn use_sidebar() -> SidebarContext {
    expect_context::<SidebarContext>()
}

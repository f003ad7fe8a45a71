//! Header Component
//!
//! Sticky site header: desktop nav list, mobile hamburger menu, contact
//! button, and an account control driven by the injected store. The nav
//! lists are kept in sync with the current URL by the nav-sync controller;
//! setup is deferred one frame because the underline indicator is sized
//! from the rendered label, which needs a layout box first.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::*;
use leptos_router::A;

use crate::nav::{collect_nav_items, DomNavItem, NavSync, NAV_ENTRIES};
use crate::routing::RouteFeed;
use crate::state::{Store, Subscription};

type SharedSync = Rc<RefCell<Option<NavSync<DomNavItem>>>>;

/// Site header. Store and route feed are injected so the component carries
/// no global state of its own.
#[component]
pub fn Header(store: Store, routes: RouteFeed) -> impl IntoView {
    let header_ref = create_node_ref::<html::Header>();
    let menu_open = create_rw_signal(false);
    let is_authenticated = create_rw_signal(store.snapshot().is_authenticated);

    // Mounted flag: store and route callbacks must become no-ops the moment
    // cleanup runs, even if a deferred frame is still pending.
    let mounted = Rc::new(Cell::new(true));
    let controller: SharedSync = Rc::new(RefCell::new(None));
    let route_sub: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let mounted_for_store = Rc::clone(&mounted);
    let store_sub = store.subscribe(move |state| {
        if mounted_for_store.get() {
            is_authenticated.set(state.is_authenticated);
        }
    });

    // Nav-sync setup runs after the next layout pass.
    {
        let mounted = Rc::clone(&mounted);
        let controller = Rc::clone(&controller);
        let route_sub_slot = Rc::clone(&route_sub);
        let routes = routes.clone();
        request_animation_frame(move || {
            if !mounted.get() {
                return;
            }
            let Some(header) = header_ref.get_untracked() else {
                return;
            };
            let root: &web_sys::Element = &header;

            let mut sync = NavSync::new(collect_nav_items(root));
            sync.sync_to_path(&routes.current_path());
            *controller.borrow_mut() = Some(sync);

            let mounted = Rc::clone(&mounted);
            let controller = Rc::clone(&controller);
            let routes_for_handler = routes.clone();
            *route_sub_slot.borrow_mut() = Some(routes.on_route_changed(move || {
                if !mounted.get() {
                    return;
                }
                if let Some(sync) = controller.borrow_mut().as_mut() {
                    sync.sync_to_path(&routes_for_handler.current_path());
                }
            }));
        });
    }

    {
        let mounted = Rc::clone(&mounted);
        let route_sub = Rc::clone(&route_sub);
        on_cleanup(move || {
            mounted.set(false);
            route_sub.borrow_mut().take();
            drop(store_sub);
        });
    }

    // Both nav lists render the same entries; mobile items get offset
    // indices so a click lands on the element that was actually clicked.
    let render_entries = {
        let controller = Rc::clone(&controller);
        move |base: usize, close_menu: Option<RwSignal<bool>>| {
            NAV_ENTRIES
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let idx = base + i;
                    let controller = Rc::clone(&controller);
                    let label = match entry.href {
                        Some(href) => view! {
                            <span><A href=href>{entry.label}</A></span>
                        }
                        .into_view(),
                        None => view! { <span>{entry.label}</span> }.into_view(),
                    };
                    view! {
                        <li
                            class="nav-item relative flex flex-col items-center cursor-pointer"
                            on:click=move |_| {
                                if let Some(sync) = controller.borrow_mut().as_mut() {
                                    sync.handle_click(idx);
                                }
                                if let Some(open) = close_menu {
                                    open.set(false);
                                }
                            }
                        >
                            {label}
                            <span class="nav-indicator hidden absolute -bottom-1 h-0.5 rounded-full bg-amber-400" />
                        </li>
                    }
                })
                .collect_view()
        }
    };

    let auth_store = store.clone();
    let account = move || {
        let store = auth_store.clone();
        if is_authenticated.get() {
            view! {
                <button
                    class="text-sm text-amber-300 hover:text-amber-200 transition-colors"
                    on:click=move |_| store.sign_out()
                >
                    "Sign out"
                </button>
            }
            .into_view()
        } else {
            view! {
                <button
                    class="text-sm text-gray-300 hover:text-white transition-colors"
                    on:click=move |_| store.sign_in()
                >
                    "Sign in"
                </button>
            }
            .into_view()
        }
    };

    view! {
        <header
            node_ref=header_ref
            class="fixed top-0 left-0 right-0 z-50 px-6 md:px-16 py-6 backdrop-blur bg-gray-900/60"
        >
            <nav class="flex items-center justify-between">
                <div class="flex items-center space-x-6">
                    // Hamburger button (mobile only)
                    <button
                        id="hamburger-btn"
                        class="md:hidden text-white text-2xl focus:outline-none"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>

                    <A href="/" class="text-xl font-bold text-white">"Haven"</A>

                    // Desktop nav
                    <ul id="nav-list" class="hidden md:flex space-x-10 text-lg font-medium text-white">
                        {render_entries(0, None)}
                    </ul>
                </div>

                <div class="flex items-center space-x-4">
                    {account}
                    <A href="/contact">
                        <button class="flex gap-2 rounded-full border border-white px-4 py-2 text-white hover:bg-white/10 transition-colors">
                            <span class="text-lg">"Contact Us"</span>
                        </button>
                    </A>
                </div>
            </nav>

            // Mobile menu
            <ul
                id="mobile-menu"
                class="md:hidden mt-4 flex flex-col gap-4 text-white text-lg font-medium"
                class:hidden=move || !menu_open.get()
            >
                {render_entries(NAV_ENTRIES.len(), Some(menu_open))}
            </ul>
        </header>
    }
}

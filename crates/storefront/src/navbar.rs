use leptos::{ev::MouseEvent, prelude::*};
use scoop::render::CartDisplay;

use crate::{dom, scroll::navbar_is_solid};

/// In-page sections reachable from the navbar, as `(id, label)`.
const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("contact", "Contact"),
];

/// Units in the cart; zero when the cart could not be loaded.
fn cart_units(display: &CartDisplay) -> u32 {
    match display {
        CartDisplay::Items(view) => view.rows.iter().map(|row| row.quantity).sum(),
        CartDisplay::Error(_) => 0,
    }
}

/// Anchor that scrolls smoothly to `id` instead of jumping.
#[component]
pub(crate) fn SectionLink(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=class
            href=format!("#{id}")
            on:click=move |event: MouseEvent| {
                event.prevent_default();
                dom::scroll_to_section(id);
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub(crate) fn Navbar(
    scroll_y: RwSignal<f64>,
    cart: RwSignal<CartDisplay>,
    overlay_open: RwSignal<bool>,
) -> impl IntoView {
    let units = move || cart.with(cart_units);

    view! {
        <nav class="navbar" class:navbar-solid=move || navbar_is_solid(scroll_y.get())>
            <SectionLink id="home" class="navbar-brand">
                <i class="fas fa-ice-cream" aria-hidden="true"></i>
                " Scoop"
            </SectionLink>
            <ul class="navbar-links">
                {SECTIONS
                    .into_iter()
                    .map(|(id, label)| {
                        view! {
                            <li>
                                <SectionLink id=id class="nav-link">
                                    {label}
                                </SectionLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class="navbar-cart"
                aria-label=move || format!("Open cart ({} items)", units())
                on:click=move |_| overlay_open.set(true)
            >
                <i class="fas fa-shopping-cart" aria-hidden="true"></i>
                <span class="navbar-cart-count">{units}</span>
            </button>
        </nav>
    }
}

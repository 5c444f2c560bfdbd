use leptos::prelude::*;

use crate::{navbar::SectionLink, scroll::parallax_offset};

#[component]
pub(crate) fn Hero(scroll_y: RwSignal<f64>) -> impl IntoView {
    view! {
        <header
            id="home"
            class="hero-section"
            style:background-position-y=move || parallax_offset(scroll_y.get())
        >
            <div class="hero-content">
                <h1>"Handcrafted ice cream, scooped fresh every day"</h1>
                <p class="lead">"Small-batch flavours made from real ingredients."</p>
                <SectionLink id="menu" class="btn btn-primary btn-lg">
                    "Explore the menu"
                </SectionLink>
            </div>
        </header>
    }
}

#[component]
pub(crate) fn About() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <h2 class="section-title reveal">"Our Story"</h2>
            <p class="reveal">
                "We started with one hand-cranked churn and a stubborn belief that ice cream should \
                 taste of what it is made from."
            </p>
            <p class="reveal">
                "Every batch is still churned in the shop, in small runs, from milk delivered each \
                 morning."
            </p>
        </section>
    }
}

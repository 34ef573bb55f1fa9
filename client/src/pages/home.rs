//! Public landing page.

use leptos::prelude::*;

/// Steps listed under "How It Works": title and description.
pub const STEPS: [(&str, &str); 3] = [
    ("Input Dimensions", "Enter your plot size and the rooms you need."),
    ("AI Generation", "Our AI lays out a floor plan that fits your requirements."),
    ("Customize", "Adjust rooms on the canvas until the plan is right."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Design Your Dream Space with AI"</h1>
                <p class="home-page__subtitle">
                    "Create custom floor plans in minutes. Tell us your dimensions and requirements, and let AI do the rest."
                </p>
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/auth">"Start Creating"</a>
                    <a class="btn" href="/projects">"View Playgrounds"</a>
                </div>
            </section>

            <section class="home-page__steps">
                <h2>"How It Works"</h2>
                <ol class="home-page__step-list">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, body))| {
                            view! {
                                <li class="home-page__step">
                                    <span class="home-page__step-number">{i + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>

            <section class="home-page__cta">
                <h2>"Ready to Create Your Floor Plan?"</h2>
                <a class="btn btn--primary" href="/auth">"Get Started Now"</a>
            </section>
        </div>
    }
}

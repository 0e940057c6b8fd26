//! Presentational components: header with search bar, category sidebar,
//! recipe card grid and the detail modal. All state lives in `app.rs` and
//! flows in through props.

use crate::api::Recipe;
use dioxus::prelude::*;

const DEFAULT_THUMB: &str = "/default-thumb.png";

#[component]
pub fn Header(on_search: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    rsx! {
        header { class: "header",
            h1 { class: "brand", "Recipe Explorer" }
            form {
                class: "searchbar",
                prevent_default: "onsubmit",
                onsubmit: move |_| on_search.call(draft.read().trim().to_string()),
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search recipes...",
                    aria_label: "Search recipes",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value())
                }
                button { class: "search-btn", r#type: "submit", "🔍" }
            }
        }
    }
}

#[component]
pub fn Sidebar(
    categories: Vec<String>,
    active_category: String,
    on_select: EventHandler<String>,
) -> Element {
    let all_class = if active_category.is_empty() { "active" } else { "" };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-title", "Categories" }
            ul { class: "category-list",
                li {
                    class: "{all_class}",
                    onclick: move |_| on_select.call(String::new()),
                    "All"
                }
                for cat in categories {
                    {
                        let label = cat.clone();
                        let item_class = if active_category == cat { "active" } else { "" };
                        rsx! {
                            li {
                                key: "{cat}",
                                class: "{item_class}",
                                onclick: move |_| on_select.call(label.clone()),
                                "{cat}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecipeCard(recipe: Recipe, on_click: EventHandler<Recipe>) -> Element {
    let image = recipe.image.clone().unwrap_or_else(|| DEFAULT_THUMB.to_string());
    let clicked = recipe.clone();

    rsx! {
        div { class: "recipe-card", onclick: move |_| on_click.call(clicked.clone()),
            div { class: "recipe-thumb",
                img { src: "{image}", alt: "{recipe.title}" }
            }
            div { class: "recipe-info",
                h3 { class: "recipe-title", "{recipe.title}" }
                p { class: "recipe-category", "{recipe.category}" }
            }
        }
    }
}

#[component]
pub fn RecipesGrid(recipes: Vec<Recipe>, on_recipe_click: EventHandler<Recipe>) -> Element {
    if recipes.is_empty() {
        return rsx! {
            div { class: "recipes-empty", "No recipes found." }
        };
    }

    rsx! {
        div { class: "recipes-grid",
            for recipe in recipes {
                RecipeCard {
                    key: "{recipe.id}",
                    recipe: recipe.clone(),
                    on_click: move |r| on_recipe_click.call(r)
                }
            }
        }
    }
}

#[component]
pub fn RecipeDetailModal(recipe: Recipe, on_close: EventHandler<()>) -> Element {
    let image = recipe.image.clone().unwrap_or_else(|| DEFAULT_THUMB.to_string());
    let description = recipe.description.clone().unwrap_or_default();
    let ingredients = recipe.ingredients.clone().unwrap_or_default();
    let instructions = recipe.instructions.clone().unwrap_or_default();

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div { class: "modal-content", onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { class: "detail-title", "{recipe.title}" }
                img { class: "detail-image", src: "{image}", alt: "{recipe.title}" }
                div { class: "detail-meta",
                    span { class: "detail-category", "{recipe.category}" }
                    if let Some(time) = recipe.time {
                        span { class: "detail-time", "⏱ {time} min" }
                    }
                }
                div { class: "detail-summary", "{description}" }
                div { class: "detail-section",
                    h4 { "Ingredients" }
                    ul { class: "ingredients-list",
                        for ing in ingredients {
                            li { "{ing}" }
                        }
                    }
                }
                div { class: "detail-section",
                    h4 { "Instructions" }
                    ol { class: "instructions-list",
                        for step in instructions {
                            li { "{step}" }
                        }
                    }
                }
            }
        }
    }
}

use crate::api::{ApiClient, Recipe};
use crate::config;
use crate::ui::{Header, RecipeDetailModal, RecipesGrid, Sidebar};
use chrono::Datelike;
use dioxus::prelude::*;

/// Shown in the sidebar when the categories endpoint is unreachable.
pub const FALLBACK_CATEGORIES: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Dessert"];

pub fn app() -> Element {
    let api = use_signal(|| ApiClient::new(&config::api_base_url()));

    let mut recipes = use_signal(Vec::<Recipe>::new);
    let mut categories = use_signal(Vec::<String>::new);
    let mut active_category = use_signal(String::new);
    let mut search_query = use_signal(String::new);
    let loading = use_signal(|| false);
    let mut selected_recipe = use_signal(|| None::<Recipe>);
    let fetch_seq = use_signal(|| 0u64);

    // Categories and the unfiltered recipe list are fetched once on mount.
    use_future(move || async move {
        let client = api.peek().clone();
        match client.list_categories().await {
            Ok(list) => categories.set(list),
            Err(err) => {
                log::warn!("category fetch failed, using fallback list: {err}");
                categories.set(FALLBACK_CATEGORIES.iter().map(|s| s.to_string()).collect());
            }
        }
        load_recipes(api, String::new(), String::new(), recipes, loading, fetch_seq);
    });

    let year = chrono::Local::now().year();

    rsx! {
        div { class: "main-layout",
            Header {
                on_search: move |query: String| {
                    search_query.set(query.clone());
                    let category = active_category.read().clone();
                    load_recipes(api, query, category, recipes, loading, fetch_seq);
                }
            }
            div { class: "content-area",
                Sidebar {
                    categories: categories.read().clone(),
                    active_category: active_category.read().clone(),
                    on_select: move |category: String| {
                        active_category.set(category.clone());
                        let query = search_query.read().clone();
                        load_recipes(api, query, category, recipes, loading, fetch_seq);
                    }
                }
                main { class: "main-content",
                    if *loading.read() {
                        div { class: "loader", "Loading recipes..." }
                    } else {
                        RecipesGrid {
                            recipes: recipes.read().clone(),
                            on_recipe_click: move |recipe: Recipe| {
                                spawn(async move {
                                    let client = api.peek().clone();
                                    let detail = match client.get_recipe(&recipe.id).await {
                                        Ok(detail) => detail,
                                        Err(err) => {
                                            log::warn!("detail fetch failed for recipe {}: {err}", recipe.id);
                                            recipe.clone()
                                        }
                                    };
                                    selected_recipe.set(Some(detail));
                                });
                            }
                        }
                    }
                }
            }
            if let Some(recipe) = selected_recipe.read().clone() {
                RecipeDetailModal {
                    recipe,
                    on_close: move |_| selected_recipe.set(None)
                }
            }
            footer { class: "footer", "© {year} Recipe Explorer" }
        }
    }
}

/// Dispatch a recipe list fetch. Each dispatch bumps the generation counter;
/// a response is applied only while its generation is still current, so a
/// stale response can never overwrite the result of a later search or
/// category change.
fn load_recipes(
    api: Signal<ApiClient>,
    query: String,
    category: String,
    mut recipes: Signal<Vec<Recipe>>,
    mut loading: Signal<bool>,
    mut fetch_seq: Signal<u64>,
) {
    let seq = fetch_seq.peek().wrapping_add(1);
    fetch_seq.set(seq);
    loading.set(true);

    spawn(async move {
        let client = api.peek().clone();
        let fetched = match client.list_recipes(&query, &category).await {
            Ok(list) => list,
            Err(err) => {
                log::warn!("recipe list fetch failed: {err}");
                Vec::new()
            }
        };
        if *fetch_seq.peek() == seq {
            recipes.set(fetched);
            loading.set(false);
        }
    });
}

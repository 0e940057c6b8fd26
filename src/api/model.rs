use serde::Deserialize;

/// A recipe as returned by the backend. The listing endpoint sends summaries
/// (id, title, category, image); the detail endpoint fills in the rest.
/// Missing fields simply stay `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub time: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_recipe() {
        let json = r#"{
            "id": "42",
            "title": "Shakshuka",
            "category": "Breakfast",
            "image": "https://img.example/shakshuka.jpg",
            "description": "Eggs poached in spiced tomato sauce.",
            "ingredients": ["4 eggs", "1 can tomatoes", "1 onion"],
            "instructions": ["Soften the onion.", "Add tomatoes.", "Poach the eggs."],
            "time": 35
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.title, "Shakshuka");
        assert_eq!(recipe.category, "Breakfast");
        assert_eq!(recipe.time, Some(35));
        assert_eq!(recipe.ingredients.unwrap().len(), 3);
        assert_eq!(recipe.instructions.unwrap().len(), 3);
    }

    #[test]
    fn deserializes_summary_without_optionals() {
        let json = r#"{"id": "7", "title": "Toast", "category": "Breakfast"}"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "7");
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.description, None);
        assert_eq!(recipe.ingredients, None);
        assert_eq!(recipe.instructions, None);
        assert_eq!(recipe.time, None);
    }

    #[test]
    fn deserializes_recipe_array() {
        let json = r#"[
            {"id": "1", "title": "Pancakes", "category": "Breakfast", "image": "/p.png"},
            {"id": "2", "title": "Ramen", "category": "Dinner"}
        ]"#;

        let recipes: Vec<Recipe> = serde_json::from_str(json).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].image.as_deref(), Some("/p.png"));
        assert_eq!(recipes[1].title, "Ramen");
    }
}

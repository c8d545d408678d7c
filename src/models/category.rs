use serde::Serialize;

/// Event categories known to the store (`events.category_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Tech,      // 2
    Sports,    // 3
    Art,       // 4
    Education, // 5
    Music,     // 6
    Food,      // 7
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Music,
        Category::Sports,
        Category::Art,
        Category::Education,
        Category::Tech,
        Category::Food,
    ];

    pub fn id(&self) -> i64 {
        match self {
            Category::Tech => 2,
            Category::Sports => 3,
            Category::Art => 4,
            Category::Education => 5,
            Category::Music => 6,
            Category::Food => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Sports => "sports",
            Category::Art => "art",
            Category::Education => "education",
            Category::Music => "music",
            Category::Food => "food",
        }
    }

    /// Helper: convert a name from CLI (any case)
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| c.name() == lower)
    }
}

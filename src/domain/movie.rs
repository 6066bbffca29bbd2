
/// A catalogue entry rendered by the demo pages.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Movie {
    // ---
    pub id: String,
    pub title: String,
    pub year: u16,
    pub stars: f32,
}

impl Movie {
    // ---
    pub fn new(id: &str, title: &str, year: u16, stars: f32) -> Self {
        // ---
        Self {
            id: id.to_string(),
            title: title.to_string(),
            year,
            stars,
        }
    }
}

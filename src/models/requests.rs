//! Request DTOs for the calculator API
//!
//! Defines the query string accepted by the arithmetic endpoints.

/// Query parameters for an arithmetic request (GET /:operation?x=..&y=..)
///
/// Both operands are kept as raw text. The cache key is built from the text,
/// so `x=2` and `x=2.0` are distinct requests.
#[derive(Debug, Clone, Default)]
pub struct CalcQuery {
    /// First operand
    pub x: Option<String>,
    /// Second operand
    pub y: Option<String>,
}

impl CalcQuery {
    /// Builds the query from decoded `name=value` pairs.
    ///
    /// A repeated operand keeps its first value; unknown names are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "x" => &mut query.x,
                "y" => &mut query.y,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Raw `x` text, empty when absent.
    pub fn x_text(&self) -> &str {
        self.x.as_deref().unwrap_or_default()
    }

    /// Raw `y` text, empty when absent.
    pub fn y_text(&self) -> &str {
        self.y.as_deref().unwrap_or_default()
    }
}

pub mod item_row;
pub mod lead_row;
pub mod outfit_row;

pub use item_row::{ItemRow, NewItemRow};
pub use lead_row::NewLeadRow;
pub use outfit_row::{NewOutfitRow, OutfitRow};

use serde::{Deserialize, Deserializer};

/// Row ids arrive as either uuid strings or bigint numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

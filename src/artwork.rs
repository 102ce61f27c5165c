//! Artwork URL selection from PokeAPI metadata.

use serde::Deserialize;

use crate::error::IconError;

/// The slice of a `/pokemon/{id}` response that carries image URLs.
#[derive(Debug, Default, Deserialize)]
pub struct PokemonMetadata {
    /// Sprite URLs; absent on malformed or trimmed responses.
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

/// `sprites` object.
#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    /// Small default front sprite.
    pub front_default: Option<String>,
    /// Alternative sprite sets.
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// `sprites.other` object.
#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    /// High-resolution official artwork.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<OfficialArtwork>,
}

/// `sprites.other["official-artwork"]` object.
#[derive(Debug, Default, Deserialize)]
pub struct OfficialArtwork {
    /// Front-facing artwork URL.
    pub front_default: Option<String>,
}

impl PokemonMetadata {
    /// Preferred image URL: official artwork first, then the default sprite.
    ///
    /// Empty strings count as missing.
    #[must_use]
    pub fn artwork_url(&self) -> Option<&str> {
        let sprites = self.sprites.as_ref()?;
        let official = sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref());
        non_empty(official).or_else(|| non_empty(sprites.front_default.as_deref()))
    }
}

fn non_empty(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty())
}

/// Resolve the image URL for `id` from its metadata document.
///
/// # Errors
///
/// Returns [`IconError::NotFound`] if neither URL field is usable, or
/// [`IconError::Decode`] if the sprite fields have the wrong JSON types.
pub fn resolve_artwork_url(id: u32, metadata: &serde_json::Value) -> Result<String, IconError> {
    let parsed = PokemonMetadata::deserialize(metadata)
        .map_err(|e| IconError::Decode(format!("Unexpected sprites layout for id {id}: {e}")))?;
    parsed.artwork_url().map(str::to_string).ok_or(IconError::NotFound { id })
}

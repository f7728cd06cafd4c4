use crate::error::FetchError;
use crate::github::{Release, ReleaseAsset};

/// Finds the asset called exactly `name` in `release`.
///
/// Matching is case-sensitive and the first entry with that name wins.
pub fn locate_asset<'a>(release: &'a Release, name: &str) -> Result<&'a ReleaseAsset, FetchError> {
    if release.assets.is_empty() {
        return Err(FetchError::NoAssets {
            tag: release.tag_name.clone(),
        });
    }

    release
        .assets
        .iter()
        .find(|asset| asset.name == name)
        .ok_or_else(|| FetchError::AssetNotFound {
            name: name.to_string(),
            tag: release.tag_name.clone(),
            available: release.assets.iter().map(|a| a.name.clone()).collect(),
        })
}

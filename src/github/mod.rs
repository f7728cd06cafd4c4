mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GetReleases, GitHub, PER_PAGE, asset_url};
#[cfg(test)]
pub use client::MockGetReleases;
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};

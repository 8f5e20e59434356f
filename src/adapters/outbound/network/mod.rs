/// Network adapters for package registries
mod nuget_client;
mod nuspec;

pub use nuget_client::{NuGetRepository, DEFAULT_TIMEOUT, NUGET_ECOSYSTEM, NUGET_FLAT_CONTAINER_URL};

/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the CSV reader, the NuGet registry client, report formatters, console
/// progress and output presenters.
pub mod outbound;

/// Application services that drive outbound ports on behalf of a use case
mod part_resolver;

pub use part_resolver::PartResolver;

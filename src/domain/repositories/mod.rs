//! Trait definitions abstracting infrastructure away from the domain.
//!
//! These traits are the registry's only seams: [`LinkStore`] for persisted
//! state and [`LocationResolver`] for simulated click locations. Concrete
//! implementations live in `crate::infrastructure`; mock implementations
//! are auto-generated via `mockall` for testing.

pub mod link_store;
pub mod location_resolver;

pub use link_store::LinkStore;
pub use location_resolver::LocationResolver;

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use location_resolver::MockLocationResolver;

//! Location-resolution trait for click analytics.

/// Supplies the location label attached to each click.
///
/// Real geolocation is out of scope; production binds this to a resolver
/// that samples a fixed pool of city labels, and tests inject a
/// deterministic implementation.
#[cfg_attr(test, mockall::automock)]
pub trait LocationResolver: Send + Sync {
    /// Returns the location label for the click being recorded.
    fn resolve(&self) -> String;
}

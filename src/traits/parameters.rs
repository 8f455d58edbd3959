use crate::params::Parameters;

/// Externally owned deformation parameters
pub trait ParameterSource {
    /// One consistent copy of all three values
    fn snapshot(&self) -> Parameters;

    /// Increments whenever the values change
    fn revision(&self) -> u64;
}

/// Monotonic time source read once per frame cycle
pub trait TimeSource {
    /// Seconds since an arbitrary, fixed epoch
    fn now(&self) -> f64;
}

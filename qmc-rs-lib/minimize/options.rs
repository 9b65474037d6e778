use bon::Builder;

/// Configuration of the minimization pipeline.
#[derive(Debug, Clone, Builder)]
pub struct MinimizerOptions {
    /// Number of Boolean variables every term ranges over. Every minterm
    /// handed to the minimizer must have exactly this many positions.
    #[builder(default = 6)]
    pub variable_count: usize,
}

impl Default for MinimizerOptions {
    fn default() -> Self {
        MinimizerOptions { variable_count: 6 }
    }
}

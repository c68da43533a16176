//! Name-keyed construction of detector instances.
//!
//! The registry is process-wide state: a mutex-protected name → factory
//! map, with built-in detectors registered lazily exactly once on first
//! access. Registration order is irrelevant; names are listed sorted.

use std::collections::BTreeMap;
use std::sync::{LazyLock, Mutex, Once};

use fmo_detect_core::{Config, Detector, Dims, PixelFormat};
use fmo_detect_strips::StripClusterDetector;

/// Constructor for one registered algorithm.
pub type Factory = Box<dyn Fn(&Config, PixelFormat, Dims) -> Box<dyn Detector> + Send + Sync>;

/// Errors produced at the construction/registration boundary.
///
/// Per-frame processing has no recoverable error conditions; a candidate
/// that fails validation is a normal negative outcome, not an error.
#[derive(thiserror::Error, Debug)]
pub enum AlgorithmError {
    /// `Config::name` does not match any registered factory.
    #[error("unknown algorithm name: {0}")]
    UnknownAlgorithm(String),
    /// A factory is already registered under this name.
    #[error("duplicate algorithm name: {0}")]
    DuplicateAlgorithm(String),
}

static REGISTRY: LazyLock<Mutex<BTreeMap<String, Factory>>> =
    LazyLock::new(|| Mutex::new(BTreeMap::new()));

static BUILTINS: Once = Once::new();

/// Register the built-in detectors, exactly once per process.
///
/// Tolerates a name already taken by an earlier external registration
/// rather than clobbering it.
fn register_builtins() {
    BUILTINS.call_once(|| {
        let factory: Factory = Box::new(|config, format, dims| {
            Box::new(StripClusterDetector::new(config.clone(), format, dims))
        });
        let mut registry = REGISTRY.lock().expect("algorithm registry poisoned");
        registry
            .entry(fmo_detect_strips::ALGORITHM_NAME.to_string())
            .or_insert(factory);
    });
}

/// Construct the detector selected by `config.name`.
pub fn make(
    config: &Config,
    format: PixelFormat,
    dims: Dims,
) -> Result<Box<dyn Detector>, AlgorithmError> {
    register_builtins();
    let registry = REGISTRY.lock().expect("algorithm registry poisoned");
    let factory = registry
        .get(&config.name)
        .ok_or_else(|| AlgorithmError::UnknownAlgorithm(config.name.clone()))?;
    Ok(factory(config, format, dims))
}

/// Register an external detector factory under `name`.
pub fn register_factory(name: &str, factory: Factory) -> Result<(), AlgorithmError> {
    register_builtins();
    let mut registry = REGISTRY.lock().expect("algorithm registry poisoned");
    if registry.contains_key(name) {
        return Err(AlgorithmError::DuplicateAlgorithm(name.to_string()));
    }
    registry.insert(name.to_string(), factory);
    Ok(())
}

/// Names of all registered algorithms, sorted, each exactly once.
pub fn list_factories() -> Vec<String> {
    register_builtins();
    let registry = REGISTRY.lock().expect("algorithm registry poisoned");
    registry.keys().cloned().collect()
}

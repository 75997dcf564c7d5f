//! Domain services
//!
//! Detection, disambiguation, classification and routing logic.

mod classifier;
mod detector;
mod natural_order;
mod resolver;
mod router;
mod signature_registry;

pub use classifier::classify;
pub use detector::FormatDetector;
pub use natural_order::{SortDirection, SortToggle, natural_cmp, sort_natural};
pub use resolver::{
    CFB_CONTAINER, CFB_MAGIC, DEFAULT_CFB_TARGET, DEFAULT_ZIP_TARGET, DisambiguationResolver,
    FallbackPolicy, FallbackRule, ZIP_CONTAINER, ZIP_MAGIC,
};
pub use router::FileRouter;
pub use signature_registry::SignatureRegistry;

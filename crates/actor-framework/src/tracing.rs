//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole process.
//!
//! The format is compact and hides the crate/module prefix (`with_target(false)`): every
//! actor log line already carries an `entity_type` field, so the module path adds nothing.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the final collection size
//! - **Entity Operations**: `Created`, `Updated`, `Deleted`, `Not found` with `entity_type` and `id`
//! - **Validation**: the pipeline name and step index that rejected a payload (debug)
//! - **Client Calls**: one span per client method via `#[instrument]`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and pipeline rejections
//! ```
//!
//! With `RUST_LOG=info` a create then delete of an order reads:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=1 size=1
//! INFO Deleted entity_type="Order" id=1 size=0
//! ```

/// Installs the global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once at process start. Later calls are ignored, so tests may call it freely.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}

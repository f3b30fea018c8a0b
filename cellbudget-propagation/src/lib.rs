//! Propagation path loss models
//!
//! Turns carrier frequency, link distance, antenna heights and the
//! environment classification into a path loss in dB:
//!
//! - **Okumura-Hata** for 0.15–2 GHz, valid from 1 to 10 km
//! - **ETSI TR 38.901** Urban Macro, Urban Micro and Rural Macro for
//!   2–100 GHz
//!
//! # Architecture
//!
//! ```text
//! frequency + LinkParameters
//!            │
//!            ▼
//!     select_model()  ──►  PropagationModel
//!                            ├─ OkumuraHata
//!                            ├─ EtsiUrbanMacro
//!                            ├─ EtsiUrbanMicro
//!                            └─ EtsiRuralMacro
//!            │
//!            ├─ path_loss()       gated by the validity window
//!            └─ unguarded_loss()  window ignored (interference)
//! ```
//!
//! Loss results are `Option<f64>`: `None` means the model has no value for
//! that geometry, either because the distance lies outside its validity
//! window or because it falls in a region the model leaves undefined.
//!
//! # Example
//!
//! ```rust
//! use cellbudget_common::LinkParameters;
//! use cellbudget_propagation::PropagationModel;
//!
//! let params = LinkParameters::default();
//! let model = PropagationModel::for_link(3.5, &params).unwrap();
//! assert_eq!(model.name(), "ETSI-TR-38-901");
//!
//! let loss = model.path_loss(3.5, 15.0, params.tx_height, params.rx_height).unwrap();
//! assert!(loss.is_some());
//! ```

pub mod etsi;
pub mod model;
pub mod okumura_hata;
pub mod selector;

pub use etsi::{EtsiRuralMacro, EtsiUrbanMacro, EtsiUrbanMicro, FREQUENCY_SCALE};
pub use model::{PropagationModel, ValidityWindow};
pub use okumura_hata::OkumuraHata;
pub use selector::{
    select_model, ETSI_FREQUENCY_RANGE_GHZ, OKUMURA_HATA_FREQUENCY_RANGE_GHZ,
};

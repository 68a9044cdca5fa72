//! Description of feed-forward networks.
//!
//! [`construct_nn`] turns a list of layer widths into a chain of linear
//! layers separated by ReLU. The result is backend-independent; a training
//! crate maps [`Layer`]s onto the modules of its tensor library.
mod base;
mod config;
pub use base::{construct_nn, Activation, Layer, Mlp};
pub use config::MlpConfig;

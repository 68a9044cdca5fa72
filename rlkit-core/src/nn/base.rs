use super::MlpConfig;
use crate::error::RlkitError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activation function placed after a linear layer.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub enum Activation {
    /// No-op.
    #[default]
    Identity,

    /// Rectified linear unit.
    Relu,

    /// Hyperbolic tangent.
    Tanh,

    /// Logistic sigmoid.
    Sigmoid,
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "Identity",
            Self::Relu => "ReLU",
            Self::Tanh => "Tanh",
            Self::Sigmoid => "Sigmoid",
        };
        write!(f, "{}", name)
    }
}

/// A layer of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Fully-connected layer with bias.
    Linear {
        /// Input width.
        in_dim: usize,
        /// Output width.
        out_dim: usize,
    },

    /// Element-wise activation.
    Activation(Activation),
}

/// Description of a multilayer perceptron: linear layers separated by ReLU,
/// followed by an output activation.
///
/// This is a topology only; it holds no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mlp {
    layers: Vec<Layer>,
}

/// Builds the description of an MLP with layer widths `sizes`.
///
/// Widths `[s0, s1, ..., sk]` give `k` linear layers `s(i-1) -> s(i)`, each
/// followed by ReLU except the last one, which is followed by
/// `output_activation`.
///
/// ```rust
/// use rlkit_core::nn::{construct_nn, Activation, Layer};
///
/// let mlp = construct_nn(&[4, 32, 2], Activation::Identity).unwrap();
/// assert_eq!(
///     mlp.layers(),
///     &[
///         Layer::Linear { in_dim: 4, out_dim: 32 },
///         Layer::Activation(Activation::Relu),
///         Layer::Linear { in_dim: 32, out_dim: 2 },
///         Layer::Activation(Activation::Identity),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns [`RlkitError::InvalidLayerSizes`] if fewer than two widths are
/// given or a width is zero.
pub fn construct_nn(sizes: &[usize], output_activation: Activation) -> Result<Mlp, RlkitError> {
    if sizes.len() < 2 || sizes.contains(&0) {
        return Err(RlkitError::InvalidLayerSizes(sizes.len()));
    }

    let n_layers = sizes.len() - 1;
    let layers = sizes
        .windows(2)
        .enumerate()
        .flat_map(|(i, w)| {
            let act = if i < n_layers - 1 {
                Activation::Relu
            } else {
                output_activation
            };
            [
                Layer::Linear {
                    in_dim: w[0],
                    out_dim: w[1],
                },
                Layer::Activation(act),
            ]
        })
        .collect();

    Ok(Mlp { layers })
}

impl Mlp {
    /// Builds the description from [`MlpConfig`].
    pub fn build(config: &MlpConfig) -> Result<Self, RlkitError> {
        construct_nn(&config.sizes, config.output_activation)
    }

    /// Layers in order, a linear layer always followed by its activation.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of linear layers.
    pub fn depth(&self) -> usize {
        self.layers.len() / 2
    }

    /// Input width.
    pub fn in_dim(&self) -> usize {
        match self.layers[0] {
            Layer::Linear { in_dim, .. } => in_dim,
            Layer::Activation(_) => unreachable!(),
        }
    }

    /// Output width.
    pub fn out_dim(&self) -> usize {
        match self.layers[self.layers.len() - 2] {
            Layer::Linear { out_dim, .. } => out_dim,
            Layer::Activation(_) => unreachable!(),
        }
    }

    /// Number of weights and biases of the linear layers.
    pub fn num_parameters(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| match layer {
                Layer::Linear { in_dim, out_dim } => (in_dim + 1) * out_dim,
                Layer::Activation(_) => 0,
            })
            .sum()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mlp(")?;
        for (i, layer) in self.layers.iter().enumerate() {
            match layer {
                Layer::Linear { in_dim, out_dim } => {
                    writeln!(f, "  ({}): Linear({} -> {})", i, in_dim, out_dim)?
                }
                Layer::Activation(act) => writeln!(f, "  ({}): {}", i, act)?,
            }
        }
        write!(f, ")")
    }
}

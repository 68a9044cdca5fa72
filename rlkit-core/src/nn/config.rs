use super::Activation;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
/// Configuration of [`Mlp`](super::Mlp).
pub struct MlpConfig {
    /// Widths of the layers, input first.
    pub sizes: Vec<usize>,

    /// Activation following the final linear layer.
    #[serde(default)]
    pub output_activation: Activation,
}

impl MlpConfig {
    /// Creates configuration of MLP with identity output.
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            output_activation: Activation::Identity,
        }
    }

    /// Sets the activation of the final layer.
    pub fn output_activation(mut self, v: Activation) -> Self {
        self.output_activation = v;
        self
    }

    /// Constructs [`MlpConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`MlpConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_mlp_config() -> Result<()> {
        let config = MlpConfig::new(vec![4, 64, 64, 2]).output_activation(Activation::Tanh);

        let dir = TempDir::new("mlp_config")?;
        let path = dir.path().join("mlp_config.yaml");

        config.save(&path)?;
        let config_ = MlpConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_output_activation_defaults_to_identity() -> Result<()> {
        let config: MlpConfig = serde_yaml::from_str("sizes: [3, 8, 1]\n")?;
        assert_eq!(config, MlpConfig::new(vec![3, 8, 1]));
        Ok(())
    }
}

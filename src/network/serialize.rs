use super::{LayerParams, Matrix, Network, Objective};
use crate::error::IoError;
use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Extension appended by [`Network::save_to_path`] when the given path
/// does not already end with it.
pub const MODEL_FILE_EXTENSION: &str = ".json";

/// Version tag written into every snapshot; load rejects any other.
const FORMAT_VERSION: u32 = 1;

/// Serializable snapshot of one layer's parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableLayer {
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

/// Serializable snapshot of a whole network.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableNetwork {
    format_version: u32,
    input_dim: usize,
    objective: Objective,
    layers: Vec<SerializableLayer>,
}

fn invalid_data(message: String) -> IoError {
    IoError::StdIoError(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message,
    ))
}

fn vec2_to_matrix(rows: &[Vec<f32>]) -> Result<Matrix, IoError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    let flat: Vec<f32> = rows.iter().flat_map(|row| row.iter().copied()).collect();
    Matrix::from_shape_vec((n_rows, n_cols), flat).map_err(|e| invalid_data(e.to_string()))
}

impl Network {
    /// Writes the network (input dimension, objective, and every layer's
    /// weights and biases) as pretty JSON to `path`, appending
    /// [`MODEL_FILE_EXTENSION`] when the path does not end with it.
    ///
    /// # Parameters
    ///
    /// * `path` - File path to write to (e.g. "stored_model" or
    ///   "stored_model.json")
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Model successfully written to file
    /// - `Err(IoError::StdIoError)` - File creation or write failed
    /// - `Err(IoError::JsonError)` - Serialization to JSON failed
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let snapshot = SerializableNetwork {
            format_version: FORMAT_VERSION,
            input_dim: self.input_dim,
            objective: self.objective,
            layers: self
                .layers
                .iter()
                .map(|layer| SerializableLayer {
                    weights: layer.weights.outer_iter().map(|row| row.to_vec()).collect(),
                    bias: layer.bias.column(0).to_vec(),
                })
                .collect(),
        };

        let path = if path.ends_with(MODEL_FILE_EXTENSION) {
            path.to_string()
        } else {
            format!("{}{}", path, MODEL_FILE_EXTENSION)
        };

        let file = File::create(&path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);
        to_writer_pretty(&mut writer, &snapshot).map_err(IoError::JsonError)?;
        writer.flush().map_err(IoError::StdIoError)?;

        Ok(())
    }

    /// Rebuilds a network from a snapshot written by
    /// [`Network::save_to_path`].
    ///
    /// # Parameters
    ///
    /// * `path` - File path to load from (e.g. "stored_model.json")
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The reconstructed network
    /// - `Err(IoError::StdIoError)` - Missing or unreadable file, an
    ///   unknown format version, an empty layer list, a zero input
    ///   dimension, or a weight/bias shape chain that does not line up
    /// - `Err(IoError::JsonError)` - Corrupt JSON
    ///
    /// A broken snapshot never produces a partially constructed network.
    pub fn load_from_path(path: &str) -> Result<Network, IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let snapshot: SerializableNetwork = from_reader(reader).map_err(IoError::JsonError)?;

        if snapshot.format_version != FORMAT_VERSION {
            return Err(invalid_data(format!(
                "unsupported model format version {}, expected {}",
                snapshot.format_version, FORMAT_VERSION
            )));
        }
        if snapshot.layers.is_empty() {
            return Err(invalid_data("model file contains no layers".to_string()));
        }
        if snapshot.input_dim == 0 {
            return Err(invalid_data(
                "model file has a zero input dimension".to_string(),
            ));
        }

        let mut layers = Vec::with_capacity(snapshot.layers.len());
        let mut fan_in = snapshot.input_dim;
        for (i, layer) in snapshot.layers.iter().enumerate() {
            let weights = vec2_to_matrix(&layer.weights)?;
            if weights.nrows() == 0 || weights.ncols() != fan_in {
                return Err(invalid_data(format!(
                    "layer {} weight matrix is {}x{}, expected fan-in {}",
                    i,
                    weights.nrows(),
                    weights.ncols(),
                    fan_in
                )));
            }
            if layer.bias.len() != weights.nrows() {
                return Err(invalid_data(format!(
                    "layer {} bias has {} entries, expected {}",
                    i,
                    layer.bias.len(),
                    weights.nrows()
                )));
            }
            let bias = Matrix::from_shape_vec((layer.bias.len(), 1), layer.bias.clone())
                .map_err(|e| invalid_data(e.to_string()))?;
            fan_in = weights.nrows();
            layers.push(LayerParams { weights, bias });
        }

        Ok(Network::from_parts(
            snapshot.input_dim,
            layers,
            snapshot.objective,
        ))
    }
}

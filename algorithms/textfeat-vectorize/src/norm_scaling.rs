//! Sample normalization methods
use ndarray::{Array2, Axis, Zip};
use textfeat::traits::Transformer;

/// Norm used to scale every row of a weighted matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Norm {
    /// Sum of absolute values
    L1,
    /// Euclidean norm
    L2,
}

/// Norm scaler: scales all rows of a matrix to have unit norm, according to the specified norm
/// measure. Rows made only of zeros are left untouched.
///
/// ### Example
///
/// ```rust
/// use ndarray::array;
/// use textfeat::traits::Transformer;
/// use textfeat_vectorize::NormScaler;
///
/// let scaled = NormScaler::l1().transform(array![[1., 3.], [0., 0.]]);
/// assert_eq!(scaled, array![[0.25, 0.75], [0., 0.]]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormScaler {
    norm: Norm,
}

impl NormScaler {
    pub fn new(norm: Norm) -> Self {
        Self { norm }
    }

    /// Initializes a norm scaler that uses l2 norm
    pub fn l2() -> Self {
        Self { norm: Norm::L2 }
    }

    /// Initializes a norm scaler that uses l1 norm
    pub fn l1() -> Self {
        Self { norm: Norm::L1 }
    }

    pub fn norm(&self) -> Norm {
        self.norm
    }
}

impl Transformer<Array2<f64>, Array2<f64>> for NormScaler {
    /// Scales all rows in the array of shape (ndocuments, nentries) to have unit norm.
    fn transform(&self, x: Array2<f64>) -> Array2<f64> {
        let norms = match &self.norm {
            Norm::L1 => x.map_axis(Axis(1), |row| row.iter().map(|el| el.abs()).sum::<f64>()),
            Norm::L2 => x.map_axis(Axis(1), |row| row.dot(&row).sqrt()),
        };

        let mut x = x;
        Zip::from(x.rows_mut())
            .and(&norms)
            .for_each(|mut row, &norm| {
                if norm > 0. {
                    row.mapv_inplace(|el| el / norm);
                }
            });
        x
    }
}

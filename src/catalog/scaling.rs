/// Min-max scaler fitted on a single column.
///
/// A zero-variance column (min == max) scales every value to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler {
    pub min: f64,
    pub max: f64,
}

impl MinMaxScaler {
    /// Returns `None` for an empty column.
    pub fn fit<I: IntoIterator<Item = f64>>(values: I) -> Option<MinMaxScaler> {
        values.into_iter().fold(None, |acc, value| match acc {
            None => Some(MinMaxScaler {
                min: value,
                max: value,
            }),
            Some(scaler) => Some(MinMaxScaler {
                min: scaler.min.min(value),
                max: scaler.max.max(value),
            }),
        })
    }

    pub fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }
}

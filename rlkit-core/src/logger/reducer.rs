//! Reduction functions applied to logged values.
use std::fmt;

/// A named function reducing a window of logged values to a scalar.
///
/// The name is used to label the result in a
/// [`Summary`](super::Summary): attribute `reward` reduced by `mean` is
/// reported as `reward_mean`.
///
/// The built-in reducers of `Reducer<f32>` return `NaN` for an empty window,
/// except [`Reducer::sum`] (`0`) and [`Reducer::count`] (`0`). Custom reducers
/// receive empty windows as well; the logger does not guard against them.
pub struct Reducer<T> {
    name: String,
    f: Box<dyn Fn(&[T]) -> f32>,
}

impl<T> Reducer<T> {
    /// Creates a reducer from a display name and a function.
    ///
    /// ```rust
    /// use rlkit_core::logger::Reducer;
    ///
    /// let range = Reducer::new("range", |vs: &[f32]| {
    ///     let max = vs.iter().copied().fold(f32::MIN, f32::max);
    ///     let min = vs.iter().copied().fold(f32::MAX, f32::min);
    ///     max - min
    /// });
    /// assert_eq!(range.reduce(&[1.0, 4.0, 2.0]), 3.0);
    /// ```
    pub fn new(name: impl Into<String>, f: impl Fn(&[T]) -> f32 + 'static) -> Self {
        Self {
            name: name.into(),
            f: Box::new(f),
        }
    }

    /// Display name of the reducer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the reducer to a window of values.
    pub fn reduce(&self, vs: &[T]) -> f32 {
        (self.f)(vs)
    }

    /// Returns the same reducer under another display name.
    pub fn rename(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            f: self.f,
        }
    }

    /// Number of values in the window.
    pub fn count() -> Self {
        Self::new("count", |vs: &[T]| vs.len() as f32)
    }
}

impl<T: 'static> Reducer<T> {
    /// Lifts the reducer to logs of another type by mapping each value first.
    ///
    /// Useful for array-valued logs:
    ///
    /// ```rust
    /// use rlkit_core::logger::Reducer;
    ///
    /// let norm = |v: &Vec<f32>| v.iter().map(|x| x * x).sum::<f32>().sqrt();
    /// let r = Reducer::max().map(norm).rename("norm_max");
    /// assert_eq!(r.reduce(&[vec![3.0, 4.0], vec![1.0, 0.0]]), 5.0);
    /// ```
    pub fn map<U: 'static>(self, g: impl Fn(&U) -> T + 'static) -> Reducer<U> {
        let f = self.f;
        Reducer {
            name: self.name,
            f: Box::new(move |vs: &[U]| {
                let mapped = vs.iter().map(&g).collect::<Vec<_>>();
                f(&mapped)
            }),
        }
    }
}

impl Reducer<f32> {
    /// Arithmetic mean.
    pub fn mean() -> Self {
        Self::new("mean", mean)
    }

    /// Minimum value.
    pub fn min() -> Self {
        Self::new("min", |vs: &[f32]| {
            vs.iter().copied().reduce(f32::min).unwrap_or(f32::NAN)
        })
    }

    /// Maximum value.
    pub fn max() -> Self {
        Self::new("max", |vs: &[f32]| {
            vs.iter().copied().reduce(f32::max).unwrap_or(f32::NAN)
        })
    }

    /// Median; the mean of the two middle values for even-sized windows.
    pub fn median() -> Self {
        Self::new("median", median)
    }

    /// Sum of values.
    pub fn sum() -> Self {
        Self::new("sum", |vs: &[f32]| vs.iter().sum())
    }

    /// Population standard deviation.
    pub fn std() -> Self {
        Self::new("std", |vs: &[f32]| {
            let m = mean(vs);
            let var = vs.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / vs.len() as f32;
            var.sqrt()
        })
    }

    /// The most recent value of the window.
    pub fn last() -> Self {
        Self::new("last", |vs: &[f32]| vs.last().copied().unwrap_or(f32::NAN))
    }
}

fn mean(vs: &[f32]) -> f32 {
    vs.iter().sum::<f32>() / vs.len() as f32
}

fn median(vs: &[f32]) -> f32 {
    if vs.is_empty() {
        return f32::NAN;
    }
    let mut vs = vs.to_vec();
    vs.sort_by(|x, y| x.total_cmp(y));
    let n = vs.len();
    if n % 2 == 1 {
        vs[n / 2]
    } else {
        (vs[n / 2 - 1] + vs[n / 2]) / 2.0
    }
}

impl<T> fmt::Debug for Reducer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer").field("name", &self.name).finish()
    }
}

impl<T> From<Reducer<T>> for Vec<Reducer<T>> {
    fn from(reducer: Reducer<T>) -> Self {
        vec![reducer]
    }
}

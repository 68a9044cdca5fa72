use super::{Reducer, Summary, SummaryQuery};
use crate::error::RlkitError;
use log::debug;
use std::collections::HashMap;
use xxhash_rust::xxh3::Xxh3Builder;

/// Log of a single attribute.
struct Attribute<T> {
    name: String,

    /// Logged values, append-only.
    log: Vec<T>,

    /// Start of the window of the next incremental summary.
    cursor: usize,

    reducers: Vec<Reducer<T>>,
}

/// Accumulates values under named attributes and summarizes them.
///
/// Each attribute is registered with one or more [`Reducer`]s. A summary
/// applies every reducer of every selected attribute to a window of the log:
/// either the whole log, or the values logged since the previous incremental
/// summary of that attribute.
///
/// `T` is the type of logged values, `f32` by default. Array-valued logs use
/// `Vec<f32>` together with [`Reducer::map`].
///
/// # Examples
///
/// ```rust
/// use rlkit_core::logger::{MetricsLogger, Reducer, SummaryQuery};
///
/// let mut logger: MetricsLogger = MetricsLogger::new();
/// logger.add_attribute("reward", Reducer::mean()).unwrap();
///
/// for r in [1.0, 2.0, 3.0] {
///     logger.put("reward", r).unwrap();
/// }
/// let summary = logger.summarize(&SummaryQuery::default()).unwrap();
/// assert_eq!(summary.to_string(), "reward_mean=2.0000");
///
/// logger.put("reward", 5.0).unwrap();
/// let summary = logger.summarize(&SummaryQuery::default()).unwrap();
/// assert_eq!(summary.to_string(), "reward_mean=5.0000");
///
/// let query = SummaryQuery::default().from_beginning(true);
/// let summary = logger.summarize(&query).unwrap();
/// assert_eq!(summary.to_string(), "reward_mean=2.7500");
/// ```
pub struct MetricsLogger<T = f32> {
    /// Attributes in registration order.
    attrs: Vec<Attribute<T>>,

    /// Attribute name to position in `attrs`.
    index: HashMap<String, usize, Xxh3Builder>,
}

impl<T> Default for MetricsLogger<T> {
    fn default() -> Self {
        Self {
            attrs: Vec::new(),
            index: HashMap::default(),
        }
    }
}

impl<T> MetricsLogger<T> {
    /// Creates a logger with no attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every attribute together with its log, cursor and reducers.
    pub fn reset(&mut self) {
        debug!("Reset metrics logger ({} attributes)", self.attrs.len());
        self.attrs.clear();
        self.index.clear();
    }

    /// Registers an attribute with one reducer or a list of reducers.
    ///
    /// ```rust
    /// use rlkit_core::logger::{MetricsLogger, Reducer};
    ///
    /// let mut logger: MetricsLogger = MetricsLogger::new();
    /// logger.add_attribute("loss", Reducer::mean()).unwrap();
    /// logger.add_attribute("reward", vec![Reducer::min(), Reducer::max()]).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RlkitError::DuplicateAttribute`] if `name` is already registered.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        reducers: impl Into<Vec<Reducer<T>>>,
    ) -> Result<(), RlkitError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(RlkitError::DuplicateAttribute(name));
        }

        self.index.insert(name.clone(), self.attrs.len());
        self.attrs.push(Attribute {
            name,
            log: Vec::new(),
            cursor: 0,
            reducers: reducers.into(),
        });

        Ok(())
    }

    /// Appends a value to the log of an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`RlkitError::UnknownAttribute`] if `name` is not registered.
    pub fn put(&mut self, name: &str, value: T) -> Result<(), RlkitError> {
        let ix = self.position(name)?;
        self.attrs[ix].log.push(value);
        Ok(())
    }

    /// Reduces the selected attributes.
    ///
    /// Without [`SummaryQuery::from_beginning`], each selected attribute is
    /// reduced over the values logged since its previous incremental summary
    /// and its cursor then moves to the end of the log. With it, whole logs are
    /// reduced and cursors are left untouched.
    ///
    /// An empty window is still passed to the reducers.
    ///
    /// # Errors
    ///
    /// Returns [`RlkitError::UnknownAttribute`] if a selected name is not
    /// registered. No cursor moves in that case.
    pub fn summarize(&mut self, query: &SummaryQuery) -> Result<Summary, RlkitError> {
        let ixs = if query.attributes.is_empty() {
            (0..self.attrs.len()).collect::<Vec<_>>()
        } else {
            query
                .attributes
                .iter()
                .map(|name| self.position(name))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut summary = Summary::default();
        for ix in ixs {
            let attr = &mut self.attrs[ix];
            let start = if query.from_beginning { 0 } else { attr.cursor };
            let window = &attr.log[start..];

            for reducer in attr.reducers.iter() {
                let label = format!("{}_{}", attr.name, reducer.name());
                summary.push(label, reducer.reduce(window));
            }

            if !query.from_beginning {
                attr.cursor = attr.log.len();
            }
        }

        Ok(summary)
    }

    /// Names of the registered attributes, in registration order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|attr| attr.name.as_str())
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The whole log of an attribute.
    pub fn log(&self, name: &str) -> Result<&[T], RlkitError> {
        let ix = self.position(name)?;
        Ok(self.attrs[ix].log.as_slice())
    }

    /// The values an incremental summary of `name` would reduce now.
    pub fn pending(&self, name: &str) -> Result<&[T], RlkitError> {
        let attr = &self.attrs[self.position(name)?];
        Ok(&attr.log[attr.cursor..])
    }

    fn position(&self, name: &str) -> Result<usize, RlkitError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RlkitError::UnknownAttribute(name.to_string()))
    }
}

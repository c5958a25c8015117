//! Ordered node names with name ↔ index lookup.

use std::collections::HashMap;

use crate::error::{Result, RouteGenError};

/// The ordered, unique names of a graph's nodes.
///
/// Node `i` of every matrix built over these labels is named `names()[i]`.
///
/// # Examples
///
/// ```
/// use u_routegen::graph::NodeLabels;
///
/// let labels = NodeLabels::new(["Hub", "A", "B"]).unwrap();
/// assert_eq!(labels.index_of("B").unwrap(), 2);
/// assert!(labels.index_of("Z").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabels {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeLabels {
    /// Creates labels from an ordered list of names.
    ///
    /// Fails with `InvalidParameter` if a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(RouteGenError::InvalidParameter(format!(
                    "duplicate node name '{name}'"
                )));
            }
        }
        Ok(Self { names, index })
    }

    /// Index of the node called `name`.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RouteGenError::UnknownNode(name.to_string()))
    }

    /// Name of node `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// All names in node order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Labels for a subset of nodes, in the given order.
    pub fn restrict(&self, indices: &[usize]) -> Result<Self> {
        let names = indices
            .iter()
            .map(|&i| {
                self.names.get(i).cloned().ok_or_else(|| {
                    RouteGenError::InvalidParameter(format!(
                        "node {i} is out of range for {} labels",
                        self.names.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(names)
    }
}

//! Entity selectors and index subsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;

/// Mesh entity kinds. In 2D, faces and edges coincide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Node,
    Edge,
    Cell,
}

impl EntityKind {
    /// Alias: codimension-1 entities of a 2D mesh are its edges.
    pub const FACE: EntityKind = EntityKind::Edge;

    /// Topological dimension of the entity.
    #[inline]
    pub const fn dimension(self) -> usize {
        match self {
            EntityKind::Node => 0,
            EntityKind::Edge => 1,
            EntityKind::Cell => 2,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Node => f.write_str("node"),
            EntityKind::Edge => f.write_str("edge"),
            EntityKind::Cell => f.write_str("cell"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(EntityKind::Node),
            "edge" | "face" => Ok(EntityKind::Edge),
            "cell" => Ok(EntityKind::Cell),
            other => Err(MeshError::InvalidEntityKind(other.to_string())),
        }
    }
}

impl TryFrom<usize> for EntityKind {
    type Error = MeshError;

    /// Select by topological dimension (0, 1, 2).
    fn try_from(dim: usize) -> Result<Self, Self::Error> {
        match dim {
            0 => Ok(EntityKind::Node),
            1 => Ok(EntityKind::Edge),
            2 => Ok(EntityKind::Cell),
            other => Err(MeshError::InvalidEntityKind(other.to_string())),
        }
    }
}

/// Which entities a measure/tangent/normal query evaluates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IndexSelection {
    /// Every entity of the requested kind, in index order.
    #[default]
    All,
    /// An explicit list of entity indices (order and repeats preserved).
    Subset(Vec<usize>),
}

impl IndexSelection {
    /// Resolve against `len` entities of `kind`, checking bounds.
    pub fn resolve(&self, kind: EntityKind, len: usize) -> Result<Vec<usize>, MeshError> {
        match self {
            IndexSelection::All => Ok((0..len).collect()),
            IndexSelection::Subset(ids) => {
                if let Some(&index) = ids.iter().find(|&&i| i >= len) {
                    return Err(MeshError::IndexOutOfRange { kind, index, len });
                }
                Ok(ids.clone())
            }
        }
    }
}

impl From<Vec<usize>> for IndexSelection {
    fn from(ids: Vec<usize>) -> Self {
        IndexSelection::Subset(ids)
    }
}

impl From<&[usize]> for IndexSelection {
    fn from(ids: &[usize]) -> Self {
        IndexSelection::Subset(ids.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entity_kinds() {
        assert_eq!("face".parse::<EntityKind>().unwrap(), EntityKind::Edge);
        assert_eq!(EntityKind::try_from(2).unwrap(), EntityKind::Cell);
        assert_eq!(
            "vertex".parse::<EntityKind>(),
            Err(MeshError::InvalidEntityKind("vertex".into()))
        );
        assert!(matches!(
            EntityKind::try_from(3),
            Err(MeshError::InvalidEntityKind(_))
        ));
    }

    #[test]
    fn subset_is_bounds_checked() {
        let sel = IndexSelection::from(vec![0, 4]);
        assert_eq!(
            sel.resolve(EntityKind::Edge, 4),
            Err(MeshError::IndexOutOfRange {
                kind: EntityKind::Edge,
                index: 4,
                len: 4
            })
        );
        assert_eq!(IndexSelection::All.resolve(EntityKind::Node, 3).unwrap(), vec![0, 1, 2]);
    }
}

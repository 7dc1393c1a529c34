use super::geo_utils;
use geo::{Intersects, MultiPolygon, Point};
use rstar::{RTree, RTreeObject, AABB};

/// a node in a [`PolygonalRTree`]: one multipolygon geometry with its
/// attached payload and a precomputed envelope.
pub struct PolygonalRTreeNode<D> {
    pub geometry: MultiPolygon<f64>,
    pub data: D,
    envelope: AABB<[f64; 2]>,
}

impl<D> RTreeObject for PolygonalRTreeNode<D> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// spatial index over polygon datasets supporting point containment queries.
/// candidate nodes are found by envelope intersection then confirmed against
/// the exact geometry.
pub struct PolygonalRTree<D> {
    tree: RTree<PolygonalRTreeNode<D>>,
    size: usize,
}

impl<D> PolygonalRTree<D> {
    pub fn new(entries: Vec<(MultiPolygon<f64>, D)>) -> Result<Self, String> {
        let nodes = entries
            .into_iter()
            .map(|(geometry, data)| {
                let envelope = geo_utils::multipolygon_envelope(&geometry)
                    .ok_or_else(|| String::from("cannot build envelope for empty geometry"))?;
                Ok(PolygonalRTreeNode {
                    geometry,
                    data,
                    envelope,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;
        let size = nodes.len();
        Ok(Self {
            tree: RTree::bulk_load(nodes),
            size,
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// all nodes whose geometry contains (or touches) the query point. the
    /// returned nodes borrow from the index only, not the query point.
    pub fn containing(
        &self,
        point: &Point<f64>,
    ) -> impl Iterator<Item = &PolygonalRTreeNode<D>> + '_ {
        let envelope = AABB::from_point([point.x(), point.y()]);
        let point = *point;
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(move |node| node.geometry.intersects(&point))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolygonalRTreeNode<D>> {
        self.tree.iter()
    }
}

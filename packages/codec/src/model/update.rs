//! Incremental updates delivered through `<NetworkLinkControl>` or tours.

use serde::Serialize;

use super::feature::{Feature, FeatureContainer, Snippet};
use super::geometry::{Geometry, GeometryContainer};
use super::node::Node;
use super::view::AbstractView;
use crate::scalar::KmlDateTime;

pub const DEFAULT_MAX_SESSION_LENGTH: f64 = -1.0;

/// `<Update>`: a target document and an ordered list of operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    pub target_href: Option<String>,
    pub operations: Vec<UpdateOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum UpdateOperation {
    Create(Create),
    Delete(Delete),
    Change(Change),
}

/// An object named by `<Create>` or `<Delete>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdateTarget {
    Feature(Feature),
    Geometry(Geometry),
}

/// `<Create>`: containers (by `targetId`) receiving new children.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Create {
    pub targets: Vec<UpdateTarget>,
}

/// `<Delete>`: objects to remove, identified by `targetId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Delete {
    pub targets: Vec<UpdateTarget>,
}

/// `<Change>`: partial objects whose set fields overwrite the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Change {
    pub patches: Vec<Patch>,
}

/// One `<Change>` child.
///
/// Patches rarely form a valid tree, so they are kept as generic nodes
/// along with the local name they were read under (`Icon` and `Link` share
/// a node, as do the `Vec2` placements).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patch {
    pub element: String,
    pub node: Node,
}

impl Patch {
    #[must_use]
    pub fn new(element: impl Into<String>, node: Node) -> Self {
        Self {
            element: element.into(),
            node,
        }
    }
}

macro_rules! update_container {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Features in document order.
                pub fn features(&self) -> impl Iterator<Item = &Feature> {
                    self.targets.iter().filter_map(|target| match target {
                        UpdateTarget::Feature(feature) => Some(feature),
                        UpdateTarget::Geometry(_) => None,
                    })
                }

                /// Geometries in document order.
                pub fn geometries(&self) -> impl Iterator<Item = &Geometry> {
                    self.targets.iter().filter_map(|target| match target {
                        UpdateTarget::Geometry(geometry) => Some(geometry),
                        UpdateTarget::Feature(_) => None,
                    })
                }
            }

            impl FeatureContainer for $name {
                fn add_feature(&mut self, feature: Feature) {
                    self.targets.push(UpdateTarget::Feature(feature));
                }
            }

            impl GeometryContainer for $name {
                fn add_geometry(&mut self, geometry: Geometry) {
                    self.targets.push(UpdateTarget::Geometry(geometry));
                }
            }
        )+
    };
}

update_container!(Create, Delete);

/// `<NetworkLinkControl>`: server-side instructions for a network link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkLinkControl {
    pub min_refresh_period: f64,
    pub max_session_length: f64,
    pub cookie: Option<String>,
    pub message: Option<String>,
    pub link_name: Option<String>,
    pub link_description: Option<String>,
    pub link_snippet: Option<Snippet>,
    pub expires: Option<KmlDateTime>,
    pub update: Option<Update>,
    pub view: Option<AbstractView>,
}

impl Default for NetworkLinkControl {
    fn default() -> Self {
        Self {
            min_refresh_period: 0.0,
            max_session_length: DEFAULT_MAX_SESSION_LENGTH,
            cookie: None,
            message: None,
            link_name: None,
            link_description: None,
            link_snippet: None,
            expires: None,
            update: None,
            view: None,
        }
    }
}

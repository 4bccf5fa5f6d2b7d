//! Relationship resolver: decides where a completed child goes.
//!
//! Precedence for composite children:
//!
//! 1. a named slot on the parent (e.g. `Region`, `Icon`, `outerBoundaryIs`)
//! 2. a feature, if the parent is a [`FeatureContainer`]
//! 3. a geometry, if the parent is a [`GeometryContainer`]
//! 4. a style selector, if the parent [`HasStyleSelectors`]
//!
//! Anything else is handed back to the caller, which either recovers or
//! reports `UnsupportedRelationship`.
//!
//! [`FeatureContainer`]: crate::model::FeatureContainer
//! [`GeometryContainer`]: crate::model::GeometryContainer
//! [`HasStyleSelectors`]: crate::model::HasStyleSelectors

mod children;
mod scalars;

use crate::model::Node;
use crate::scalar::ScalarValue;

/// Attach a completed child to its parent.
///
/// # Errors
/// Returns the child unchanged when the parent has no place for it.
pub fn attach(parent: &mut Node, name: &str, child: Node) -> Result<(), Node> {
    let child = match children::attach_named(parent, name, child) {
        Ok(()) => return Ok(()),
        Err(child) => child,
    };

    match child {
        Node::Feature(feature) => match parent.as_feature_container() {
            Some(container) => {
                container.add_feature(feature);
                Ok(())
            }
            None => Err(Node::Feature(feature)),
        },
        Node::Geometry(geometry) => match parent.as_geometry_container() {
            Some(container) => {
                container.add_geometry(geometry);
                Ok(())
            }
            None => Err(Node::Geometry(geometry)),
        },
        Node::StyleSelector(selector) => match parent.as_style_holder() {
            Some(holder) => {
                holder.add_style_selector(selector);
                Ok(())
            }
            None => Err(Node::StyleSelector(selector)),
        },
        other => Err(other),
    }
}

/// Set a coerced scalar leaf on its parent.
///
/// Returns `false` when the parent has no field of that name.
pub fn assign_scalar(parent: &mut Node, name: &str, value: &ScalarValue) -> bool {
    scalars::assign(parent, name, value)
}

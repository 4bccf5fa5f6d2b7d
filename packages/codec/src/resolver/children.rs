//! Named child slots: the first rule the resolver tries.

use crate::model::{
    AbstractView, Feature, FieldValue, Geometry, Node, StyleSelector, TourPrimitive,
    UpdateOperation,
};

/// Set `child` on the slot its element name addresses, or hand it back.
pub(super) fn attach_named(parent: &mut Node, name: &str, child: Node) -> Result<(), Node> {
    match (parent, child) {
        // Root
        (Node::Kml(kml), Node::Feature(feature)) => kml.feature = Some(feature),
        (Node::Kml(kml), Node::NetworkLinkControl(control)) => {
            kml.network_link_control = Some(control);
        }

        // Feature-specific slots
        (Node::Feature(Feature::Document(document)), Node::Schema(schema)) => {
            document.schemas.push(schema);
        }
        (Node::Feature(Feature::NetworkLink(link)), Node::Link(value))
            if name == "Link" || name == "Url" =>
        {
            link.link = Some(value);
        }
        (Node::Feature(Feature::GroundOverlay(overlay)), Node::Link(icon)) if name == "Icon" => {
            overlay.overlay.icon = Some(icon);
        }
        (Node::Feature(Feature::ScreenOverlay(overlay)), Node::Link(icon)) if name == "Icon" => {
            overlay.overlay.icon = Some(icon);
        }
        (Node::Feature(Feature::PhotoOverlay(overlay)), Node::Link(icon)) if name == "Icon" => {
            overlay.overlay.icon = Some(icon);
        }
        (Node::Feature(Feature::GroundOverlay(overlay)), Node::LatLonBox(bounds)) => {
            overlay.lat_lon_box = Some(bounds);
        }
        (Node::Feature(Feature::GroundOverlay(overlay)), Node::LatLonQuad(quad)) => {
            overlay.lat_lon_quad = Some(quad);
        }
        (Node::Feature(Feature::ScreenOverlay(overlay)), Node::Vec2(point)) => match name {
            "overlayXY" => overlay.overlay_xy = Some(point),
            "screenXY" => overlay.screen_xy = Some(point),
            "rotationXY" => overlay.rotation_xy = Some(point),
            "size" => overlay.size = Some(point),
            _ => return Err(Node::Vec2(point)),
        },
        (Node::Feature(Feature::PhotoOverlay(overlay)), Node::ViewVolume(volume)) => {
            overlay.view_volume = Some(volume);
        }
        (Node::Feature(Feature::PhotoOverlay(overlay)), Node::ImagePyramid(pyramid)) => {
            overlay.image_pyramid = Some(pyramid);
        }
        (Node::Feature(Feature::PhotoOverlay(overlay)), Node::Geometry(Geometry::Point(point))) => {
            overlay.point = Some(point);
        }
        (Node::Feature(Feature::Tour(tour)), Node::Playlist(playlist)) => {
            tour.playlist = Some(playlist);
        }

        // Slots every feature has
        (Node::Feature(feature), Node::Author(author)) => feature.common_mut().author = Some(author),
        (Node::Feature(feature), Node::AtomLink(link)) => {
            feature.common_mut().atom_link = Some(link);
        }
        (Node::Feature(feature), Node::Address(details)) => {
            feature.common_mut().address_details = Some(details);
        }
        (Node::Feature(feature), Node::Snippet(snippet)) => feature.common_mut().snippets.push(snippet),
        (Node::Feature(feature), Node::View(view)) => feature.common_mut().view = Some(view),
        (Node::Feature(feature), Node::Time(time)) => feature.common_mut().time = Some(time),
        (Node::Feature(feature), Node::Region(region)) => feature.common_mut().region = Some(region),
        (Node::Feature(feature), Node::ExtendedData(data)) => {
            feature.common_mut().extended_data = Some(data);
        }

        // Geometry
        (Node::Geometry(Geometry::Polygon(polygon)), Node::Boundary(boundary)) => match name {
            "outerBoundaryIs" => {
                if boundary.rings.len() > 1 {
                    tracing::warn!(
                        rings = boundary.rings.len(),
                        "outerBoundaryIs holds several rings, keeping the first"
                    );
                }
                polygon.outer_boundary = boundary.rings.into_iter().next();
            }
            "innerBoundaryIs" => polygon.inner_boundaries.extend(boundary.rings),
            _ => return Err(Node::Boundary(boundary)),
        },
        (Node::Boundary(boundary), Node::Geometry(Geometry::LinearRing(ring))) => {
            boundary.rings.push(ring);
        }
        (Node::Geometry(Geometry::Model(model)), Node::Location(location)) => {
            model.location = Some(location);
        }
        (Node::Geometry(Geometry::Model(model)), Node::Orientation(orientation)) => {
            model.orientation = Some(orientation);
        }
        (Node::Geometry(Geometry::Model(model)), Node::Scale(scale)) => model.scale = Some(scale),
        (Node::Geometry(Geometry::Model(model)), Node::Link(link)) => model.link = Some(link),
        (Node::Geometry(Geometry::Model(model)), Node::ResourceMap(map)) => {
            model.resource_map = Some(map);
        }
        (Node::ResourceMap(map), Node::Alias(alias)) => map.aliases.push(alias),
        (Node::Geometry(Geometry::Track(track)), Node::Geometry(Geometry::Model(model))) => {
            track.model = Some(model);
        }
        (Node::Geometry(Geometry::Track(track)), Node::ExtendedData(data)) => {
            track.extended_data = Some(data);
        }
        (Node::Geometry(Geometry::MultiTrack(multi)), Node::Geometry(Geometry::Track(track))) => {
            multi.tracks.push(track);
        }

        // Styles
        (Node::StyleSelector(StyleSelector::Style(style)), sub_style) => match sub_style {
            Node::IconStyle(s) => style.icon_style = Some(s),
            Node::LabelStyle(s) => style.label_style = Some(s),
            Node::LineStyle(s) => style.line_style = Some(s),
            Node::PolyStyle(s) => style.poly_style = Some(s),
            Node::BalloonStyle(s) => style.balloon_style = Some(s),
            Node::ListStyle(s) => style.list_style = Some(s),
            other => return Err(other),
        },
        (Node::StyleSelector(StyleSelector::StyleMap(map)), Node::Pair(pair)) => map.pairs.push(pair),
        (Node::Pair(pair), Node::StyleSelector(StyleSelector::Style(style))) => {
            pair.style = Some(style);
        }
        (Node::IconStyle(style), Node::Link(icon)) if name == "Icon" => style.icon = Some(icon),
        (Node::IconStyle(style), Node::Vec2(hot_spot)) if name == "hotSpot" => {
            style.hot_spot = Some(hot_spot);
        }
        (Node::ListStyle(style), Node::ItemIcon(icon)) => style.item_icons.push(icon),

        // Views and regions
        (Node::View(AbstractView::Camera(camera)), Node::Time(time)) => camera.time = Some(time),
        (Node::View(AbstractView::LookAt(look_at)), Node::Time(time)) => look_at.time = Some(time),
        (Node::View(AbstractView::Camera(camera)), Node::ViewerOptions(options)) => {
            camera.viewer_options = Some(options);
        }
        (Node::View(AbstractView::LookAt(look_at)), Node::ViewerOptions(options)) => {
            look_at.viewer_options = Some(options);
        }
        (Node::ViewerOptions(options), Node::ViewerOption(option)) => options.options.push(option),
        (Node::Region(region), Node::LatLonAltBox(bounds)) => region.lat_lon_alt_box = Some(bounds),
        (Node::Region(region), Node::Lod(lod)) => region.lod = Some(lod),

        // Extended data
        (Node::ExtendedData(extended), Node::Data(data)) => extended.insert_data(data),
        (Node::ExtendedData(extended), Node::SchemaData(data)) => extended.schema_data.push(data),
        (Node::SchemaData(schema_data), Node::SimpleData(simple)) => {
            schema_data.insert(simple.name, FieldValue::Text(simple.value));
        }
        (Node::SchemaData(schema_data), Node::SimpleArrayData(array)) => {
            schema_data.insert(array.name, FieldValue::TextList(array.values));
        }
        (Node::Schema(schema), Node::SimpleField(field)) => schema.fields.push(field),

        // Updates
        (Node::NetworkLinkControl(control), Node::Snippet(snippet)) if name == "linkSnippet" => {
            control.link_snippet = Some(snippet);
        }
        (Node::NetworkLinkControl(control), Node::Update(update)) => control.update = Some(update),
        (Node::NetworkLinkControl(control), Node::View(view)) => control.view = Some(view),
        (Node::Update(update), Node::Create(create)) => {
            update.operations.push(UpdateOperation::Create(create));
        }
        (Node::Update(update), Node::Change(change)) => {
            update.operations.push(UpdateOperation::Change(change));
        }
        (Node::Update(update), Node::Delete(delete)) => {
            update.operations.push(UpdateOperation::Delete(delete));
        }

        // Tours
        (Node::Playlist(playlist), Node::TourPrimitive(primitive)) => {
            playlist.primitives.push(primitive);
        }
        (Node::TourPrimitive(TourPrimitive::FlyTo(fly_to)), Node::View(view)) => {
            fly_to.view = Some(view);
        }
        (Node::TourPrimitive(TourPrimitive::AnimatedUpdate(animated)), Node::Update(update)) => {
            animated.update = Some(update);
        }

        // xAL address trees nest generically
        (Node::Address(element), Node::Address(child)) => element.children.push(child),

        (_, child) => return Err(child),
    }

    Ok(())
}

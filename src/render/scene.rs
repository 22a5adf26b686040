use crate::{
    foundation::core::Point,
    geometry::command::PathSegment,
    page::controller::NodeStatus,
};

/// Everything needed to draw one frame of the roadmap.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Scene {
    /// Container width.
    pub width: f64,
    /// Height spanned by node centers.
    pub height: f64,
    /// Route already covered by the avatar.
    pub traveled: PathSegment,
    /// Route still ahead.
    pub remaining: PathSegment,
    /// Every checkpoint, in traversal order.
    pub nodes: Vec<SceneNode>,
    /// Avatar marker position.
    pub avatar: Option<Point>,
}

/// One checkpoint as drawn.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneNode {
    /// Traversal position.
    pub index: usize,
    /// Display title.
    pub title: String,
    /// Node center.
    pub position: Point,
    /// Display status.
    pub status: NodeStatus,
}

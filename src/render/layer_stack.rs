use serde::{Deserialize, Serialize};

/// Scene layers, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneLayerKind {
    Grid,
    Rows,
    Trace,
    GapIndicator,
    Status,
}

impl SceneLayerKind {
    /// Canonical back-to-front draw order.
    pub const CANONICAL: [SceneLayerKind; 5] = [
        SceneLayerKind::Grid,
        SceneLayerKind::Rows,
        SceneLayerKind::Trace,
        SceneLayerKind::GapIndicator,
        SceneLayerKind::Status,
    ];
}

#[cfg(test)]
mod tests {
    use super::SceneLayerKind;

    #[test]
    fn canonical_order_puts_status_banner_on_top() {
        assert_eq!(SceneLayerKind::CANONICAL[0], SceneLayerKind::Grid);
        assert_eq!(
            SceneLayerKind::CANONICAL.last().copied(),
            Some(SceneLayerKind::Status)
        );
    }
}

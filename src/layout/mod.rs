//! Layout engine: from matrix data to a [`Scene`] of exact coordinates.
//!
//! The grid is the upper triangle of the matrix rotated by 45 degrees, with
//! the item labels on a vertical line at its right edge and the relationship
//! curves further right.

pub mod cell;
pub mod cluster;
pub mod colorbar;
pub mod edge;

pub use cell::CellGeometry;
pub use cluster::{ClusterOffsetModel, DEFAULT_CLUSTER_OFFSET};
pub use colorbar::ColorbarLayout;
pub use edge::{EdgeCurve, EdgeCurveGenerator};

use tracing::{debug, info};

use crate::data::MatrixData;
use crate::error::Result;
use crate::options::RenderOptions;
use crate::scale::{ColorScale, QuantizeScale};
use crate::scene::{CellRecord, EdgeRecord, LabelRecord, Scene, ViewBox};

/// Top-left corner of the view box.
const VIEW_MIN: (f64, f64) = (-0.25, -0.5);

/// Extra height of the view box below the square region.
const VIEW_HEIGHT_PAD: f64 = 0.25;

/// View box for `items` items and the given cluster model.
#[must_use]
pub fn view_box(items: usize, clusters: &ClusterOffsetModel) -> ViewBox {
    let width = items as f64
        + 2.0
        + (f64::from(clusters.max_cluster()) + 1.0) * clusters.unit();
    ViewBox { min_x: VIEW_MIN.0, min_y: VIEW_MIN.1, width, height: width + VIEW_HEIGHT_PAD }
}

/// Lay out a matrix.
///
/// # Errors
///
/// Returns the validation errors of [`MatrixData::validate`] and
/// [`RenderOptions::validate`].
pub fn layout(data: &MatrixData, options: &RenderOptions) -> Result<Scene> {
    data.validate()?;
    options.validate()?;
    let _ = data.summary();

    let n = data.item_count();
    let clusters = ClusterOffsetModel::new(data.clusters.clone(), options.cluster_offset);
    let geometry = CellGeometry::new(n, &clusters);
    let colors: ColorScale = QuantizeScale::new(
        data.value_colors.clone(),
        (data.value_domain[0], data.value_domain[1]),
    )?;

    let cells: Vec<CellRecord> = data
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| CellRecord {
            tag: geometry.cell_tag(i),
            value,
            points: geometry.cell_polygon(i),
            fill: colors.entry(value).clone(),
            transform: clusters.is_active().then(|| geometry.cell_transform(i)),
        })
        .collect();

    let labels: Vec<LabelRecord> = data
        .labels
        .iter()
        .enumerate()
        .map(|(item, text)| LabelRecord {
            item,
            text: text.clone(),
            anchor: geometry.label_anchor(item),
            transform: clusters.is_active().then(|| geometry.label_transform(item)),
        })
        .collect();

    let generator = EdgeCurveGenerator::new(
        n,
        options.edge_offset,
        (options.edge_min_val, options.edge_max_val),
        options.clamp_edge_opacity,
        &clusters,
    )?;
    let edges: Vec<EdgeRecord> = data
        .edge_list()
        .iter()
        .map(|edge| {
            let curve = generator.edge_curve(edge);
            EdgeRecord {
                from: edge.from,
                to: edge.to,
                points: curve.points,
                opacity: curve.opacity,
                tension: options.edge_tension,
            }
        })
        .collect();

    let colorbar =
        ColorbarLayout::new(n, data.value_colors.len(), geometry.x_mid(), options.colorbar_shift)
            .map(|bar| bar.record(&data.value_colors, data.value_domain));
    if colorbar.is_none() {
        debug!(palette = data.value_colors.len(), items = n, "palette too long for a colorbar");
    }

    info!(
        items = n,
        cells = cells.len(),
        edges = edges.len(),
        clusters = clusters.max_cluster(),
        "laid out matrix"
    );

    Ok(Scene {
        width: options.width,
        height: options.height,
        view_box: view_box(n, &clusters),
        style: options.style.clone(),
        cells,
        labels,
        edges,
        colorbar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Edge;
    use crate::error::Error;
    use crate::geometry::{Point, Translate};
    use crate::index::{pair_count, CellIndex};

    fn palette(k: usize) -> Vec<String> {
        (0..k).map(|i| format!("#{i}{i}{i}")).collect()
    }

    fn matrix(n: usize, k: usize) -> MatrixData {
        let labels = (0..n).map(|i| format!("L{i}")).collect();
        let values = (0..pair_count(n)).map(|i| i as f64 / pair_count(n).max(1) as f64).collect();
        MatrixData::new(labels, values, [0.0, 1.0], palette(k))
    }

    #[test]
    fn test_three_item_scene() {
        let data = MatrixData::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![0.1, 0.5, 0.9],
            [0.0, 1.0],
            vec!["#fff".into(), "#000".into()],
        );
        let scene = layout(&data, &RenderOptions::default()).unwrap();

        assert_eq!(scene.cell_count(), 3);
        let fills: Vec<&str> = scene.cells.iter().map(|c| c.fill.as_str()).collect();
        assert_eq!(fills, vec!["#fff", "#000", "#000"]);
        let tags: Vec<CellIndex> = scene.cells.iter().map(|c| c.tag).collect();
        assert_eq!(tags, vec![CellIndex::new(0, 1), CellIndex::new(0, 2), CellIndex::new(1, 2)]);
        assert!(scene.cells.iter().all(|c| c.transform.is_none()));
        assert_eq!(scene.labels[2].anchor, Point::new(1.5, 2.5));
        assert!(scene.edges.is_empty());
    }

    #[test]
    fn test_clustered_scene_translates_cells_and_labels() {
        let data = matrix(4, 2).clusters(vec![0, 0, 1, 1]);
        let scene = layout(&data, &RenderOptions::default()).unwrap();

        assert_eq!(scene.labels[0].transform, Some(Translate::vertical(-0.5)));
        assert_eq!(scene.labels[3].transform, Some(Translate::vertical(0.0)));
        // (0, 3) crosses clusters 0 -> 1
        let cross = scene.cell(0, 3).unwrap();
        assert_eq!(cross.transform, Some(Translate::new(-0.25, -0.25)));
    }

    #[test]
    fn test_edges_in_input_order() {
        let data = matrix(5, 2).edges(vec![Edge::new(3, 0, 0.2), Edge::new(1, 2, 0.9)]);
        let options = RenderOptions::default();
        let scene = layout(&data, &options).unwrap();

        let tags: Vec<(usize, usize)> = scene.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(tags, vec![(3, 0), (1, 2)]);
        assert_eq!(scene.edges[0].tension, options.edge_tension);
        assert_eq!(scene.edges[0].points[0], Point::new(6.5, 3.5));
    }

    #[test]
    fn test_colorbar_threshold() {
        let options = RenderOptions::default();
        assert!(layout(&matrix(5, 5), &options).unwrap().colorbar.is_some());
        assert!(layout(&matrix(5, 6), &options).unwrap().colorbar.is_none());
    }

    #[test]
    fn test_view_box() {
        let scene = layout(&matrix(4, 2), &RenderOptions::default()).unwrap();
        assert_eq!(
            scene.view_box,
            ViewBox { min_x: -0.25, min_y: -0.5, width: 6.25, height: 6.5 }
        );

        let clusters = ClusterOffsetModel::new(Some(vec![0, 1, 2, 2]), 0.25);
        assert_eq!(view_box(4, &clusters).width, 6.75);
    }

    #[test]
    fn test_invalid_data_rejected_before_layout() {
        let mut data = matrix(3, 2);
        data.values.push(0.0);
        assert!(matches!(
            layout(&data, &RenderOptions::default()),
            Err(Error::DimensionMismatch { what: "values", .. })
        ));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = RenderOptions::default().edge_range(1.0, 1.0);
        assert!(matches!(layout(&matrix(3, 2), &options), Err(Error::ScaleDomain(_))));
    }

    #[test]
    fn test_single_item() {
        let scene = layout(&matrix(1, 1), &RenderOptions::default()).unwrap();
        assert_eq!(scene.cell_count(), 0);
        assert_eq!(scene.labels.len(), 1);
    }
}
